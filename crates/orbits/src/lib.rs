//! Closed-form Kepler helpers for circular, two-body orbits.
//!
//! [`Kepler`] binds a central mass to a [`KeplerBackend`] chosen once at
//! construction. The accelerated backend is used when it is compiled in and
//! its probe succeeds; otherwise the reference formulas are used silently.

pub mod backend;
pub mod kepler;

pub use backend::{AcceleratedBackend, KeplerBackend, ReferenceBackend};
pub use kepler::{
    BackendPreference, Kepler, KeplerError, circular_orbit_speed_mps, kepler_period_s,
};
