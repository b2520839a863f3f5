use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use helioforge::constants::{AU_M, DAY_S, YEAR_S};
use helioforge::export::{json as export_json, trajectory};
use helioforge::generation::{GenerationParams, Generator};
use helioforge::kepler::{BackendPreference, Kepler};
use helioforge::scenario;
use helioforge::system::{CentralBody, Simulation, SolarSystem, make_solar_system};
use helioforge::time::days_to_seconds;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Heliocentric circular-orbit simulator (closed-form Kepler motion)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Orbital period and circular speed at a distance from a central mass
    Kepler {
        /// Central mass in kg
        #[arg(long, default_value_t = 1.9885e30)]
        mass_kg: f64,

        /// Orbital distance in AU
        #[arg(long, default_value_t = 1.0)]
        distance_au: f64,

        #[arg(long, value_enum, default_value_t = Backend::Auto)]
        backend: Backend,
    },
    /// Procedurally generate a planet system and write it as JSON
    Generate(GenerateArgs),
    /// Write the built-in Solar System preset as JSON
    Preset {
        /// Output path (`-` for stdout)
        #[arg(long, default_value = "-")]
        output: PathBuf,
    },
    /// Step a system forward and report the final state
    Simulate(SimulateArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Number of planets
    #[arg(long, allow_negative_numbers = true)]
    count: i64,

    /// RNG seed; identical seeds give identical systems
    #[arg(long)]
    seed: u64,

    /// Innermost baseline orbit in AU
    #[arg(long, default_value_t = 0.4)]
    inner_au: f64,

    /// Outermost baseline orbit in AU
    #[arg(long, default_value_t = 40.0)]
    outer_au: f64,

    #[arg(long, default_value = "Star")]
    star_name: String,

    /// Central mass in kg
    #[arg(long, default_value_t = 1.9885e30)]
    star_mass_kg: f64,

    /// Central radius in m
    #[arg(long, default_value_t = 6.9634e8)]
    star_radius_m: f64,

    #[arg(long, value_enum, default_value_t = Backend::Auto)]
    backend: Backend,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Args)]
struct SimulateArgs {
    /// Scenario file (YAML/TOML) or directory of TOML scenarios
    #[arg(long, conflicts_with_all = ["input", "preset"])]
    scenario: Option<PathBuf>,

    /// System JSON produced by `generate`/`preset`
    #[arg(long, conflicts_with = "preset")]
    input: Option<PathBuf>,

    /// Use the built-in Solar System preset
    #[arg(long, default_value_t = false)]
    preset: bool,

    /// Time step in days (overrides the scenario)
    #[arg(long, allow_negative_numbers = true)]
    dt_days: Option<f64>,

    /// Number of steps (overrides the scenario)
    #[arg(long)]
    steps: Option<u64>,

    /// Write every step's positions as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the final system state as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Backend {
    Auto,
    Reference,
}

impl From<Backend> for BackendPreference {
    fn from(value: Backend) -> Self {
        match value {
            Backend::Auto => BackendPreference::Auto,
            Backend::Reference => BackendPreference::Reference,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Kepler {
            mass_kg,
            distance_au,
            backend,
        } => run_kepler(mass_kg, distance_au, backend),
        Command::Generate(args) => run_generate(args),
        Command::Preset { output } => {
            let system = make_solar_system()?;
            write_system(&system, &output)
        }
        Command::Simulate(args) => run_simulate(args),
    }
}

fn run_kepler(mass_kg: f64, distance_au: f64, backend: Backend) -> anyhow::Result<()> {
    let kepler = Kepler::with_preference(mass_kg, backend.into())?;
    let distance_m = distance_au * AU_M;
    let period_s = kepler.period_s(distance_m)?;
    let speed_mps = kepler.circular_speed_mps(distance_m)?;

    println!("Backend         : {}", kepler.backend_name());
    println!("Distance        : {:.6} AU ({:.6e} m)", distance_au, distance_m);
    println!(
        "Period          : {:.6e} s ({:.3} days, {:.4} years)",
        period_s,
        period_s / DAY_S,
        period_s / YEAR_S
    );
    println!("Circular speed  : {:.3} m/s", speed_mps);
    Ok(())
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let star = CentralBody::new(args.star_name, args.star_mass_kg, args.star_radius_m)?;
    let params = GenerationParams::from_signed(args.count, args.inner_au, args.outer_au)?;
    let mut rng = ChaChaRng::seed_from_u64(args.seed);
    let generator = Generator::with_backend(&star, params, args.backend.into())?;
    let planets = generator.generate(&mut rng)?;
    let system = SolarSystem::new(star, planets);
    info!(planets = system.len(), seed = args.seed, "system generated");
    write_system(&system, &args.output)
}

fn run_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let (name, system, mut dt_s, mut steps) = if let Some(path) = &args.scenario {
        let resolved = scenario::load_scenario(path)
            .with_context(|| format!("loading scenario {}", path.display()))?;
        (
            resolved.name,
            resolved.system,
            resolved.simulation.dt_s,
            resolved.simulation.steps,
        )
    } else if let Some(path) = &args.input {
        let system = export_json::load_json(path)
            .with_context(|| format!("loading system {}", path.display()))?;
        let name = system.central_body().name().to_string();
        (name, system, DAY_S, 365)
    } else if args.preset {
        ("Solar System".to_string(), make_solar_system()?, DAY_S, 365)
    } else {
        bail!("one of --scenario, --input or --preset is required");
    };

    if let Some(days) = args.dt_days {
        dt_s = days_to_seconds(days);
    }
    if let Some(n) = args.steps {
        steps = n;
    }

    let mut simulation = Simulation::new(system);
    let mut csv = match &args.csv {
        Some(path) => {
            let mut writer = trajectory::writer_for_path(path)?;
            trajectory::write_header(&mut *writer)?;
            trajectory::write_state(&mut *writer, simulation.time_s(), simulation.system())?;
            Some(writer)
        }
        None => None,
    };

    for _ in 0..steps {
        simulation.step(dt_s)?;
        if let Some(writer) = csv.as_mut() {
            trajectory::write_state(&mut **writer, simulation.time_s(), simulation.system())?;
        }
    }
    if let Some(mut writer) = csv {
        writer.flush()?;
    }
    info!(scenario = %name, steps, dt_s, "simulation finished");

    if args.csv.as_deref() != Some(Path::new("-")) {
        print_summary(&name, &simulation);
    }
    if let Some(path) = &args.output {
        export_json::save_json(simulation.system(), path)?;
    }
    Ok(())
}

fn print_summary(name: &str, simulation: &Simulation) {
    let system = simulation.system();
    println!("=== {} ===", name);
    println!(
        "Elapsed         : {:.3} days ({} planets)",
        simulation.time_s() / DAY_S,
        system.len()
    );
    for planet in system.planets() {
        let [x, y] = planet.position_m();
        println!(
            "{:<12} {:<10} a = {:>8.3} AU  phase = {:.4} rad  pos = ({:.4e}, {:.4e}) m",
            planet.name(),
            planet.kind().as_str(),
            planet.distance_au(),
            planet.phase_rad(),
            x,
            y
        );
    }
}

fn write_system(system: &SolarSystem, output: &Path) -> anyhow::Result<()> {
    if output == Path::new("-") {
        println!("{}", export_json::to_json(system, true)?);
    } else {
        export_json::save_json(system, output)?;
        info!(path = %output.display(), "system written");
    }
    Ok(())
}
