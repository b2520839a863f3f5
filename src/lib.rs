//! Heliocentric orbit simulation: closed-form Kepler motion on circular orbits.
//!
//! This façade re-exports the workspace crates so front-ends (the CLI, a
//! viewer, notebooks) depend on a single package.

pub mod scenario;

pub use helio_config as config;
pub use helio_core::{constants, reference, time, units, vector};
pub use helio_export as export;
pub use helio_generation as generation;
pub use helio_orbits as kepler;
pub use helio_system as system;

pub use helio_generation::generate;
pub use helio_orbits::Kepler;
pub use helio_system::{
    CentralBody, Planet, PlanetKind, Simulation, SolarSystem, make_solar_system,
};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
