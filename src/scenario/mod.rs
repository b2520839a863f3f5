//! Turn a scenario configuration into a ready-to-run simulation.

use std::path::Path;

use helio_config::{
    CentralBodyConfig, ConfigError, KeplerBackendConfig, ScenarioConfig, SimulationConfig,
    SystemSourceConfig,
};
use helio_export::ExportError;
use helio_generation::{GenerationError, GenerationParams, Generator};
use helio_orbits::BackendPreference;
use helio_system::{CentralBody, ModelError, Simulation, SolarSystem};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("generated systems need a [central_body] section")]
    MissingCentralBody,
    #[error("unknown preset '{0}' (available: solar)")]
    UnknownPreset(String),
    #[error("time step must be >= 0 s (got {0})")]
    InvalidTimeStep(f64),
}

/// A resolved scenario: the initial system plus how to step it.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub system: SolarSystem,
    pub simulation: SimulationConfig,
}

impl Scenario {
    /// Resolve `config`; relative `file` sources are looked up under `base_dir`.
    pub fn from_config(config: ScenarioConfig, base_dir: &Path) -> Result<Self, ScenarioError> {
        if !(config.simulation.dt_s >= 0.0) {
            return Err(ScenarioError::InvalidTimeStep(config.simulation.dt_s));
        }
        let preference = backend_preference(config.kepler_backend);

        let system = match &config.system {
            SystemSourceConfig::Generated {
                count,
                seed,
                inner_au,
                outer_au,
            } => {
                let central = central_body(
                    config
                        .central_body
                        .as_ref()
                        .ok_or(ScenarioError::MissingCentralBody)?,
                )?;
                let params = GenerationParams::from_signed(*count, *inner_au, *outer_au)?;
                let mut rng = ChaChaRng::seed_from_u64(*seed);
                let generator = Generator::with_backend(&central, params, preference)?;
                let planets = generator.generate(&mut rng)?;
                SolarSystem::new(central, planets)
            }
            SystemSourceConfig::Preset { name } => match name.to_ascii_lowercase().as_str() {
                "solar" | "sol" => helio_system::make_solar_system()?,
                _ => return Err(ScenarioError::UnknownPreset(name.clone())),
            },
            SystemSourceConfig::File { path } => {
                helio_export::json::load_json(&base_dir.join(path))?
            }
        };

        let name = config
            .name
            .unwrap_or_else(|| system.central_body().name().to_string());
        info!(
            scenario = %name,
            planets = system.len(),
            dt_s = config.simulation.dt_s,
            steps = config.simulation.steps,
            "scenario resolved"
        );

        Ok(Self {
            name,
            system,
            simulation: config.simulation,
        })
    }

    pub fn into_simulation(self) -> Simulation {
        Simulation::new(self.system)
    }
}

/// Load and resolve the scenario at `path` (YAML, TOML, or a directory of TOML files).
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, ScenarioError> {
    let path = path.as_ref();
    let config = helio_config::load_scenario(path)?;
    let base_dir = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or_else(|| Path::new("."))
    };
    Scenario::from_config(config, base_dir)
}

pub fn backend_preference(config: KeplerBackendConfig) -> BackendPreference {
    match config {
        KeplerBackendConfig::Auto => BackendPreference::Auto,
        KeplerBackendConfig::Reference => BackendPreference::Reference,
    }
}

fn central_body(config: &CentralBodyConfig) -> Result<CentralBody, ModelError> {
    CentralBody::new(config.name.clone(), config.mass_kg, config.radius_m)?
        .with_luminosity(config.luminosity_w)
}
