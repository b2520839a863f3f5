use std::f64::consts::TAU;

use helio_core::reference::{
    EARTH_MASS_KG, EARTH_RADIUS_M, ICE_GIANT_MASS_KG, ICE_GIANT_RADIUS_M, JUPITER_MASS_KG,
    JUPITER_RADIUS_M,
};
use helio_core::units::au_to_m;
use helio_orbits::{BackendPreference, Kepler};
use helio_system::{CentralBody, Planet, PlanetKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::debug;

use crate::params::{GenerationError, GenerationParams};

// Multiplicative jitter applied to each log-spaced baseline distance.
const JITTER_RANGE: (f64, f64) = (0.93, 1.07);

/// Planet generator bound to one central body.
#[derive(Debug)]
pub struct Generator {
    kepler: Kepler,
    params: GenerationParams,
}

impl Generator {
    pub fn new(central: &CentralBody, params: GenerationParams) -> Result<Self, GenerationError> {
        Self::with_backend(central, params, BackendPreference::Auto)
    }

    pub fn with_backend(
        central: &CentralBody,
        params: GenerationParams,
        preference: BackendPreference,
    ) -> Result<Self, GenerationError> {
        params.validate()?;
        let kepler = Kepler::with_preference(central.mass_kg(), preference)?;
        Ok(Self { kepler, params })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    /// Build the planet list, sorted by ascending orbital distance.
    ///
    /// Per planet the draws are, in order: jitter, mass, radius, phase.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Planet>, GenerationError> {
        let n = self.params.count;
        if n == 0 {
            return Ok(Vec::new());
        }

        let log_inner = self.params.inner_au.ln();
        let log_outer = self.params.outer_au.ln();
        let denominator = n.saturating_sub(1).max(1) as f64;

        let mut planets = Vec::with_capacity(n);
        for i in 0..n {
            let t = i as f64 / denominator;
            let base_au = (log_inner + t * (log_outer - log_inner)).exp();
            let distance_au = base_au * uniform(rng, JITTER_RANGE.0, JITTER_RANGE.1);
            let distance_m = au_to_m(distance_au);

            let kind = PlanetKind::from_distance_au(distance_au);
            let (mass_kg, radius_m) = sample_mass_radius(rng, kind);
            let phase_rad = uniform(rng, 0.0, TAU);

            let name = format!("Planet {}", i + 1);
            let planet = Planet::new(name, kind, mass_kg, radius_m, distance_m)?
                .with_phase(phase_rad)?
                .with_period(self.kepler.period_s(distance_m)?)?
                .with_orbital_speed(self.kepler.circular_speed_mps(distance_m)?)?;
            planets.push(planet);
        }

        // Jitter can swap neighbours near slot edges.
        planets.sort_by(|a, b| a.distance_m().total_cmp(&b.distance_m()));

        debug!(
            count = n,
            backend = self.kepler.backend_name(),
            innermost_au = planets[0].distance_au(),
            outermost_au = planets[n - 1].distance_au(),
            "generated planets"
        );
        Ok(planets)
    }
}

/// Generate `count` planets with an RNG seeded only from `seed`.
pub fn generate(
    central: &CentralBody,
    count: usize,
    seed: u64,
    inner_au: f64,
    outer_au: f64,
) -> Result<Vec<Planet>, GenerationError> {
    let params = GenerationParams::new(count, inner_au, outer_au)?;
    let mut rng = ChaChaRng::seed_from_u64(seed);
    generate_with_rng(central, &params, &mut rng)
}

/// Generate with a caller-supplied random source.
pub fn generate_with_rng<R: Rng + ?Sized>(
    central: &CentralBody,
    params: &GenerationParams,
    rng: &mut R,
) -> Result<Vec<Planet>, GenerationError> {
    Generator::new(central, *params)?.generate(rng)
}

/// Uniform sample in `[lo, hi)`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    lo + (hi - lo) * rng.random::<f64>()
}

fn sample_mass_radius<R: Rng + ?Sized>(rng: &mut R, kind: PlanetKind) -> (f64, f64) {
    let (mass_range, mass_ref, radius_range, radius_ref) = match kind {
        PlanetKind::Rocky => ((0.05, 5.0), EARTH_MASS_KG, (0.3, 1.5), EARTH_RADIUS_M),
        PlanetKind::GasGiant => ((0.1, 3.0), JUPITER_MASS_KG, (0.7, 1.3), JUPITER_RADIUS_M),
        PlanetKind::IceGiant => ((0.5, 2.0), ICE_GIANT_MASS_KG, (0.7, 1.2), ICE_GIANT_RADIUS_M),
        PlanetKind::Dwarf => ((0.0001, 0.01), EARTH_MASS_KG, (0.05, 0.3), EARTH_RADIUS_M),
    };
    let mass_kg = uniform(rng, mass_range.0, mass_range.1) * mass_ref;
    let radius_m = uniform(rng, radius_range.0, radius_range.1) * radius_ref;
    (mass_kg, radius_m)
}
