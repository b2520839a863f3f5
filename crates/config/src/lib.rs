//! Scenario configuration models and loaders for helioforge.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A complete run description: which star, which planets, how long to step.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub kepler_backend: KeplerBackendConfig,
    #[serde(default)]
    pub central_body: Option<CentralBodyConfig>,
    pub system: SystemSourceConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Central body parameters. Ignored by the `preset` source, which brings its own Sun.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CentralBodyConfig {
    pub name: String,
    pub mass_kg: f64,
    pub radius_m: f64,
    #[serde(default)]
    pub luminosity_w: f64,
}

/// Where the planets come from.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum SystemSourceConfig {
    #[serde(rename = "generated")]
    Generated {
        count: i64,
        seed: u64,
        #[serde(default = "default_inner_au")]
        inner_au: f64,
        #[serde(default = "default_outer_au")]
        outer_au: f64,
    },
    #[serde(rename = "preset")]
    Preset {
        #[serde(default = "default_preset")]
        name: String,
    },
    #[serde(rename = "file")]
    File { path: PathBuf },
}

/// Fixed-step run length.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_dt_s")]
    pub dt_s: f64,
    #[serde(default = "default_steps")]
    pub steps: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt_s: default_dt_s(),
            steps: default_steps(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeplerBackendConfig {
    #[default]
    Auto,
    Reference,
}

fn default_inner_au() -> f64 {
    0.4
}

fn default_outer_au() -> f64 {
    40.0
}

fn default_preset() -> String {
    "solar".to_string()
}

fn default_dt_s() -> f64 {
    86_400.0
}

fn default_steps() -> u64 {
    365
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no scenario files found in {0}")]
    EmptyDirectory(PathBuf),
}

/// Load a single scenario from a YAML or TOML file.
///
/// A directory yields its first `*.toml` scenario in file-name order.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    load_scenarios(path)?
        .into_iter()
        .next()
        .ok_or_else(|| ConfigError::EmptyDirectory(path.to_path_buf()))
}

/// Load every scenario at `path`: a YAML list, one TOML file, or a directory of TOML files.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        let value: serde_yaml::Value = serde_yaml::from_reader(reader)?;
        if value.is_sequence() {
            Ok(serde_yaml::from_value(value)?)
        } else {
            Ok(vec![serde_yaml::from_value(value)?])
        }
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
