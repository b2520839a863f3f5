//! Interchangeable evaluators for the Kepler period and circular-speed formulas.
//!
//! Backends assume validated input; range checks live in [`crate::Kepler`].

use std::f64::consts::TAU;
use std::fmt::Debug;

use helio_core::constants::G;

/// Evaluates the two circular-orbit formulas for a fixed central mass.
pub trait KeplerBackend: Debug + Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Orbital period (s) for semi-major axis `a_m`: T = 2π·sqrt(a³/(G·M)).
    fn period_s(&self, a_m: f64) -> f64;

    /// Circular orbital speed (m/s) at radius `r_m`: v = sqrt(G·M/r).
    fn circular_speed_mps(&self, r_m: f64) -> f64;
}

/// Direct evaluation of the closed-form expressions on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBackend {
    central_mass_kg: f64,
}

impl ReferenceBackend {
    pub fn new(central_mass_kg: f64) -> Self {
        Self { central_mass_kg }
    }
}

impl KeplerBackend for ReferenceBackend {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn period_s(&self, a_m: f64) -> f64 {
        TAU * (a_m.powi(3) / (G * self.central_mass_kg)).sqrt()
    }

    fn circular_speed_mps(&self, r_m: f64) -> f64 {
        (G * self.central_mass_kg / r_m).sqrt()
    }
}

/// Backend that folds the mass-dependent factors into constants up front.
///
/// Holds only immutable data derived from the central mass, so a single
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceleratedBackend {
    mu: f64,
    period_factor: f64,
}

impl AcceleratedBackend {
    /// Capability probe. Returns `None` when the backend is not compiled in
    /// or the precomputed constants for `central_mass_kg` are unusable.
    pub fn probe(central_mass_kg: f64) -> Option<Self> {
        if !cfg!(feature = "accelerated") {
            return None;
        }
        let mu = G * central_mass_kg;
        let period_factor = TAU / mu.sqrt();
        if mu.is_finite() && mu > 0.0 && period_factor.is_finite() {
            Some(Self { mu, period_factor })
        } else {
            None
        }
    }

    /// Gravitational parameter μ = G·M (m³/s²).
    pub fn mu(&self) -> f64 {
        self.mu
    }
}

impl KeplerBackend for AcceleratedBackend {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn period_s(&self, a_m: f64) -> f64 {
        self.period_factor * a_m * a_m.sqrt()
    }

    fn circular_speed_mps(&self, r_m: f64) -> f64 {
        (self.mu / r_m).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helio_core::constants::AU_M;

    #[test]
    fn reference_earth_year() {
        let backend = ReferenceBackend::new(1.9885e30);
        let days = backend.period_s(AU_M) / 86_400.0;
        assert!((days - 365.25).abs() < 1.0, "days = {days}");
    }

    #[cfg(feature = "accelerated")]
    #[test]
    fn accelerated_agrees_with_reference() {
        let mass = 1.9885e30;
        let reference = ReferenceBackend::new(mass);
        let fast = AcceleratedBackend::probe(mass).expect("probe");
        for au in [0.05, 0.387, 1.0, 5.2, 30.0, 120.0] {
            let a = au * AU_M;
            let rp = reference.period_s(a);
            let rv = reference.circular_speed_mps(a);
            assert!(((fast.period_s(a) - rp) / rp).abs() < 1e-10);
            assert!(((fast.circular_speed_mps(a) - rv) / rv).abs() < 1e-10);
        }
    }

    #[cfg(not(feature = "accelerated"))]
    #[test]
    fn probe_is_absent_without_feature() {
        assert!(AcceleratedBackend::probe(1.0e30).is_none());
    }

    #[test]
    fn probe_rejects_unusable_mass() {
        assert!(AcceleratedBackend::probe(f64::INFINITY).is_none());
        assert!(AcceleratedBackend::probe(0.0).is_none());
    }
}
