//! Deterministic procedural generation of planet sets.
//!
//! Orbits are roughly log-spaced between two bounds with a small
//! multiplicative jitter; the planet kind follows from distance and drives
//! the mass/radius ranges. Every random draw comes from the caller's RNG, so
//! identical inputs and seed always give an identical planet list.

pub mod generation;
pub mod params;

pub use generation::{Generator, generate, generate_with_rng};
pub use params::{DEFAULT_INNER_AU, DEFAULT_OUTER_AU, GenerationError, GenerationParams};
