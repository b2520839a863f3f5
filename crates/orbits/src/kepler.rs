use std::f64::consts::TAU;

use helio_core::constants::G;
use thiserror::Error;
use tracing::debug;

use crate::backend::{AcceleratedBackend, KeplerBackend, ReferenceBackend};

/// Validation failures for Kepler computations.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum KeplerError {
    #[error("central mass must be > 0 kg (got {0})")]
    NonPositiveCentralMass(f64),
    #[error("orbital distance must be > 0 m (got {0})")]
    NonPositiveDistance(f64),
    #[error("orbital period must be > 0 s (got {0})")]
    NonPositivePeriod(f64),
}

/// Which backend [`Kepler`] may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Use the accelerated backend when its probe succeeds.
    #[default]
    Auto,
    /// Always use the reference formulas.
    Reference,
}

/// Kepler computations for a fixed central mass.
#[derive(Debug)]
pub struct Kepler {
    central_mass_kg: f64,
    backend: Box<dyn KeplerBackend>,
}

impl Kepler {
    /// Bind to `central_mass_kg`, preferring the accelerated backend.
    pub fn new(central_mass_kg: f64) -> Result<Self, KeplerError> {
        Self::with_preference(central_mass_kg, BackendPreference::Auto)
    }

    pub fn with_preference(
        central_mass_kg: f64,
        preference: BackendPreference,
    ) -> Result<Self, KeplerError> {
        if !(central_mass_kg > 0.0) {
            return Err(KeplerError::NonPositiveCentralMass(central_mass_kg));
        }

        let backend: Box<dyn KeplerBackend> = match preference {
            BackendPreference::Auto => match AcceleratedBackend::probe(central_mass_kg) {
                Some(fast) => Box::new(fast),
                None => Box::new(ReferenceBackend::new(central_mass_kg)),
            },
            BackendPreference::Reference => Box::new(ReferenceBackend::new(central_mass_kg)),
        };
        debug!(
            backend = backend.name(),
            central_mass_kg, "kepler backend selected"
        );

        Ok(Self {
            central_mass_kg,
            backend,
        })
    }

    pub fn central_mass_kg(&self) -> f64 {
        self.central_mass_kg
    }

    /// Name of the selected backend (`"reference"` or `"accelerated"`).
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn is_accelerated(&self) -> bool {
        self.backend_name() == "accelerated"
    }

    /// Orbital period (s) for semi-major axis `a_m` (m).
    pub fn period_s(&self, a_m: f64) -> Result<f64, KeplerError> {
        if !(a_m > 0.0) {
            return Err(KeplerError::NonPositiveDistance(a_m));
        }
        Ok(self.backend.period_s(a_m))
    }

    /// Circular orbital speed (m/s) at radius `r_m` (m).
    pub fn circular_speed_mps(&self, r_m: f64) -> Result<f64, KeplerError> {
        if !(r_m > 0.0) {
            return Err(KeplerError::NonPositiveDistance(r_m));
        }
        Ok(self.backend.circular_speed_mps(r_m))
    }
}

/// Kepler's third law without binding a solver: T = 2π·sqrt(a³/(G·M)).
pub fn kepler_period_s(a_m: f64, central_mass_kg: f64) -> Result<f64, KeplerError> {
    if !(a_m > 0.0) {
        return Err(KeplerError::NonPositiveDistance(a_m));
    }
    if !(central_mass_kg > 0.0) {
        return Err(KeplerError::NonPositiveCentralMass(central_mass_kg));
    }
    Ok(TAU * (a_m.powi(3) / (G * central_mass_kg)).sqrt())
}

/// Speed along a circular orbit of radius `distance_m` completed in `period_s`: v = 2πr/T.
pub fn circular_orbit_speed_mps(distance_m: f64, period_s: f64) -> Result<f64, KeplerError> {
    if !(distance_m > 0.0) {
        return Err(KeplerError::NonPositiveDistance(distance_m));
    }
    if !(period_s > 0.0) {
        return Err(KeplerError::NonPositivePeriod(period_s));
    }
    Ok(TAU * distance_m / period_s)
}
