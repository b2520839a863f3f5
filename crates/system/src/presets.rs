//! A rough Sun + eight planets preset for demos and sanity checks.
//!
//! Values are approximate: recognisable, not a precision dataset.

use helio_core::reference::{
    EARTH_MASS_KG, EARTH_RADIUS_M, ICE_GIANT_MASS_KG, ICE_GIANT_RADIUS_M, JUPITER_MASS_KG,
    JUPITER_RADIUS_M, SUN_LUMINOSITY_W, SUN_MASS_KG, SUN_RADIUS_M,
};
use helio_core::units::au_to_m;
use helio_orbits::Kepler;

use crate::body::{CentralBody, Planet, PlanetKind};
use crate::error::ModelError;
use crate::system::SolarSystem;

// (name, kind, mass kg, radius m, distance AU)
const PLANETS: [(&str, PlanetKind, f64, f64, f64); 8] = [
    ("Mercury", PlanetKind::Rocky, 0.0553 * EARTH_MASS_KG, 0.383 * EARTH_RADIUS_M, 0.387),
    ("Venus", PlanetKind::Rocky, 0.815 * EARTH_MASS_KG, 0.949 * EARTH_RADIUS_M, 0.723),
    ("Earth", PlanetKind::Rocky, EARTH_MASS_KG, EARTH_RADIUS_M, 1.000),
    ("Mars", PlanetKind::Rocky, 0.107 * EARTH_MASS_KG, 0.532 * EARTH_RADIUS_M, 1.524),
    ("Jupiter", PlanetKind::GasGiant, JUPITER_MASS_KG, JUPITER_RADIUS_M, 5.204),
    ("Saturn", PlanetKind::GasGiant, 0.299 * JUPITER_MASS_KG, 0.843 * JUPITER_RADIUS_M, 9.582),
    ("Uranus", PlanetKind::IceGiant, ICE_GIANT_MASS_KG, ICE_GIANT_RADIUS_M, 19.201),
    ("Neptune", PlanetKind::IceGiant, 1.024e26, 2.4622e7, 30.047),
];

/// The Sun.
pub fn sun() -> Result<CentralBody, ModelError> {
    CentralBody::new("Sun", SUN_MASS_KG, SUN_RADIUS_M)?.with_luminosity(SUN_LUMINOSITY_W)
}

/// Sun plus Mercury..Neptune, all at phase 0, periods from Kepler's third law.
pub fn make_solar_system() -> Result<SolarSystem, ModelError> {
    let sun = sun()?;
    let kepler = Kepler::new(sun.mass_kg())?;

    let planets = PLANETS
        .iter()
        .map(|&(name, kind, mass_kg, radius_m, distance_au)| {
            let distance_m = au_to_m(distance_au);
            Planet::new(name, kind, mass_kg, radius_m, distance_m)?
                .with_period(kepler.period_s(distance_m)?)?
                .with_orbital_speed(kepler.circular_speed_mps(distance_m)?)
        })
        .collect::<Result<Vec<_>, ModelError>>()?;

    Ok(SolarSystem::new(sun, planets))
}
