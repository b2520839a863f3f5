//! Flat field dump of a [`SolarSystem`] as a JSON value.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::body::{CentralBody, Planet, PlanetKind};
use crate::error::SystemError;
use crate::system::SolarSystem;

#[derive(Deserialize)]
struct SystemRecord {
    central_body: Option<CentralBodyRecord>,
    planets: Option<Vec<PlanetRecord>>,
}

#[derive(Deserialize)]
struct CentralBodyRecord {
    name: Option<String>,
    mass_kg: Option<f64>,
    radius_m: Option<f64>,
    #[serde(default)]
    luminosity_w: f64,
}

#[derive(Deserialize)]
struct PlanetRecord {
    name: Option<String>,
    kind: Option<String>,
    mass_kg: Option<f64>,
    radius_m: Option<f64>,
    distance_m: Option<f64>,
    #[serde(default)]
    phase_rad: f64,
    #[serde(default)]
    period_s: f64,
    #[serde(default)]
    orbital_speed_mps: f64,
}

pub(crate) fn to_value(system: &SolarSystem) -> Value {
    let cb = system.central_body();
    let planets: Vec<Value> = system
        .planets()
        .iter()
        .map(|p| {
            json!({
                "name": p.name(),
                "kind": p.kind().as_str(),
                "mass_kg": p.mass_kg(),
                "radius_m": p.radius_m(),
                "distance_m": p.distance_m(),
                "phase_rad": p.phase_rad(),
                "period_s": p.period_s(),
                "orbital_speed_mps": p.orbital_speed_mps(),
            })
        })
        .collect();

    json!({
        "central_body": {
            "name": cb.name(),
            "mass_kg": cb.mass_kg(),
            "radius_m": cb.radius_m(),
            "luminosity_w": cb.luminosity_w(),
        },
        "planets": planets,
    })
}

pub(crate) fn from_value(value: &Value) -> Result<SolarSystem, SystemError> {
    let record = SystemRecord::deserialize(value)?;

    let cb = record.central_body.ok_or_else(|| missing("central_body"))?;
    let central = CentralBody::new(
        cb.name.ok_or_else(|| missing("central_body.name"))?,
        cb.mass_kg.ok_or_else(|| missing("central_body.mass_kg"))?,
        cb.radius_m.ok_or_else(|| missing("central_body.radius_m"))?,
    )?
    .with_luminosity(cb.luminosity_w)?;

    let planets = record
        .planets
        .ok_or_else(|| missing("planets"))?
        .into_iter()
        .enumerate()
        .map(|(i, p)| planet_from_record(i, p))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SolarSystem::new(central, planets))
}

fn planet_from_record(index: usize, p: PlanetRecord) -> Result<Planet, SystemError> {
    let field = |name: &str| missing(&format!("planets[{index}].{name}"));

    let kind_str = p.kind.ok_or_else(|| field("kind"))?;
    let kind: PlanetKind = kind_str.parse().map_err(SystemError::UnknownKind)?;

    let planet = Planet::new(
        p.name.ok_or_else(|| field("name"))?,
        kind,
        p.mass_kg.ok_or_else(|| field("mass_kg"))?,
        p.radius_m.ok_or_else(|| field("radius_m"))?,
        p.distance_m.ok_or_else(|| field("distance_m"))?,
    )?
    .with_phase(p.phase_rad)?
    .with_period(p.period_s)?
    .with_orbital_speed(p.orbital_speed_mps)?;
    Ok(planet)
}

fn missing(path: &str) -> SystemError {
    SystemError::MissingField(path.to_string())
}
