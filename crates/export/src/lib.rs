//! Export helpers for JSON system snapshots and CSV trajectories.

use thiserror::Error;

/// Errors raised while writing or reading exported artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    System(#[from] helio_system::SystemError),
}

pub mod json {
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::Path;

    use helio_system::SolarSystem;

    use super::ExportError;

    /// Serialize a system to a JSON string.
    pub fn to_json(system: &SolarSystem, pretty: bool) -> Result<String, ExportError> {
        let value = system.to_value();
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    /// Parse a system from JSON text produced by [`to_json`].
    pub fn from_json(text: &str) -> Result<SolarSystem, ExportError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(SolarSystem::from_value(&value)?)
    }

    /// Write a pretty-printed system to `path`, creating parent directories.
    pub fn save_json(system: &SolarSystem, path: &Path) -> Result<(), ExportError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &system.to_value())?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Load a system previously written by [`save_json`].
    pub fn load_json(path: &Path) -> Result<SolarSystem, ExportError> {
        let reader = BufReader::new(File::open(path)?);
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Ok(SolarSystem::from_value(&value)?)
    }
}

pub mod trajectory {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use helio_system::{Planet, SolarSystem};

    const HEADER: &str = "time_s,planet,kind,x_m,y_m,phase_rad";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the trajectory CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One planet position at one instant.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub time_s: f64,
        pub planet: &'a str,
        pub kind: &'a str,
        pub x_m: f64,
        pub y_m: f64,
        pub phase_rad: f64,
    }

    impl<'a> Record<'a> {
        pub fn from_planet(time_s: f64, planet: &'a Planet) -> Self {
            let [x_m, y_m] = planet.position_m();
            Self {
                time_s,
                planet: planet.name(),
                kind: planet.kind().as_str(),
                x_m,
                y_m,
                phase_rad: planet.phase_rad(),
            }
        }

        /// Serialize the record to CSV, matching the header ordering.
        ///
        /// Names containing separators, quotes or line breaks are quoted.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            let mut csv = row_writer(writer);
            self.write_row(&mut csv)?;
            csv.flush()
        }

        fn write_row<W: Write>(&self, csv: &mut csv::Writer<W>) -> io::Result<()> {
            csv.write_record([
                format!("{:.3}", self.time_s),
                self.planet.to_string(),
                self.kind.to_string(),
                format!("{:.6e}", self.x_m),
                format!("{:.6e}", self.y_m),
                format!("{:.9}", self.phase_rad),
            ])?;
            Ok(())
        }
    }

    fn row_writer(writer: &mut dyn Write) -> csv::Writer<&mut dyn Write> {
        csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer)
    }

    /// Write one row per planet for the current state of `system`.
    pub fn write_state(
        writer: &mut dyn Write,
        time_s: f64,
        system: &SolarSystem,
    ) -> io::Result<()> {
        let mut csv = row_writer(writer);
        for planet in system.planets() {
            Record::from_planet(time_s, planet).write_row(&mut csv)?;
        }
        csv.flush()
    }
}
