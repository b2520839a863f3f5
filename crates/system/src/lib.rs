//! Celestial bodies, the heliocentric system container, and the simulation driver.
//!
//! Planets move on circular orbits in the x/y plane. Only their phase changes
//! over time; everything else is fixed when the planet is built.

pub mod body;
pub mod error;
pub mod presets;
pub mod simulation;
pub mod system;

mod record;

pub use body::{CentralBody, Planet, PlanetKind};
pub use error::{ModelError, SystemError};
pub use presets::{make_solar_system, sun};
pub use simulation::{Simulation, Snapshot, Steps};
pub use system::SolarSystem;
