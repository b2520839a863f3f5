use helioforge::constants::DAY_S;
use helioforge::generate;
use helioforge::system::{
    CentralBody, ModelError, Planet, PlanetKind, SolarSystem, SystemError,
};
use serde_json::json;

fn star() -> CentralBody {
    CentralBody::new("Star", 1.0e30, 7.0e8)
        .unwrap()
        .with_luminosity(2.0e26)
        .unwrap()
}

fn generated(count: usize, seed: u64) -> SolarSystem {
    let s = star();
    let planets = generate(&s, count, seed, 0.5, 35.0).unwrap();
    SolarSystem::new(s, planets)
}

fn named(name: &str, distance_m: f64, phase_rad: f64) -> Planet {
    Planet::new(name, PlanetKind::Rocky, 1.0, 1.0, distance_m)
        .unwrap()
        .with_phase(phase_rad)
        .unwrap()
        .with_period(100.0)
        .unwrap()
}

#[test]
fn step_moves_planets() {
    let mut system = generated(3, 1);
    let before: Vec<f64> = system.planets().iter().map(|p| p.phase_rad()).collect();
    system.step(DAY_S).unwrap();
    let after: Vec<f64> = system.planets().iter().map(|p| p.phase_rad()).collect();
    assert_ne!(before, after);
}

#[test]
fn negative_step_fails() {
    let mut system = generated(3, 1);
    let before = system.clone();
    assert!(system.step(-1.0).is_err());
    assert_eq!(system, before);
}

#[test]
fn empty_system_still_validates_time_step() {
    let mut system = SolarSystem::new(star(), Vec::new());
    assert!(system.step(0.0).is_ok());
    assert!(system.step(DAY_S).is_ok());
    assert_eq!(system.step(-5.0), Err(ModelError::NegativeTimeStep(-5.0)));
    assert!(system.step(f64::NAN).is_err());
    assert!(system.step(f64::INFINITY).is_err());
    assert!(system.state_m().is_empty());
}

#[test]
fn step_error_leaves_earlier_planets_advanced() {
    let stuck = Planet::new("Stuck", PlanetKind::Dwarf, 1.0, 1.0, 5.0).unwrap();
    let mut system = SolarSystem::from_planets(star(), [named("A", 1.0, 0.0), stuck]);
    assert!(system.step(10.0).is_err());
    assert!(system.planets()[0].phase_rad() > 0.0);
}

#[test]
fn state_maps_names_to_positions() {
    let system = SolarSystem::from_planets(
        star(),
        vec![named("A", 10.0, 0.0), named("B", 20.0, std::f64::consts::FRAC_PI_2)],
    );
    let state = system.state_m();
    assert_eq!(state.len(), 2);
    assert!((state["A"][0] - 10.0).abs() < 1e-9);
    assert!(state["B"][0].abs() < 1e-9);
    assert!((state["B"][1] - 20.0).abs() < 1e-9);
}

#[test]
fn state_name_collision_is_last_write_wins() {
    let system = SolarSystem::from_planets(star(), [named("X", 1.0, 0.0), named("X", 2.0, 0.0)]);
    let state = system.state_m();
    assert_eq!(state.len(), 1);
    assert!((state["X"][0] - 2.0).abs() < 1e-12);
}

#[test]
fn from_planets_keeps_order() {
    let planets = (0..4).map(|i| named(&format!("P{}", i), 10.0 - i as f64, 0.0));
    let system = SolarSystem::from_planets(star(), planets);
    let names: Vec<&str> = system.planets().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["P0", "P1", "P2", "P3"]);
    assert_eq!(system.planet("P2").map(|p| p.distance_m()), Some(8.0));
}

#[test]
fn value_round_trip_is_exact() {
    let mut system = generated(9, 31);
    system.step(12_345.678).unwrap();
    let restored = SolarSystem::from_value(&system.to_value()).unwrap();
    assert_eq!(restored, system);
    for (a, b) in restored.planets().iter().zip(system.planets()) {
        assert_eq!(a.phase_rad().to_bits(), b.phase_rad().to_bits());
        assert_eq!(a.distance_m().to_bits(), b.distance_m().to_bits());
    }
}

#[test]
fn value_round_trip_of_empty_system() {
    let system = SolarSystem::new(star(), Vec::new());
    assert_eq!(SolarSystem::from_value(&system.to_value()).unwrap(), system);
}

#[test]
fn serialized_shape() {
    let value = generated(2, 4).to_value();
    assert_eq!(value["central_body"]["name"], "Star");
    assert_eq!(value["central_body"]["luminosity_w"], 2.0e26);
    let planets = value["planets"].as_array().unwrap();
    assert_eq!(planets.len(), 2);
    for key in [
        "name",
        "kind",
        "mass_kg",
        "radius_m",
        "distance_m",
        "phase_rad",
        "period_s",
        "orbital_speed_mps",
    ] {
        assert!(planets[0].get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn optional_fields_default_to_zero() {
    let value = json!({
        "central_body": { "name": "S", "mass_kg": 1.0e30, "radius_m": 7.0e8 },
        "planets": [
            { "name": "A", "kind": "ice_giant", "mass_kg": 1.0, "radius_m": 1.0, "distance_m": 3.0 }
        ]
    });
    let system = SolarSystem::from_value(&value).unwrap();
    assert_eq!(system.central_body().luminosity_w(), 0.0);
    let p = &system.planets()[0];
    assert_eq!(p.kind(), PlanetKind::IceGiant);
    assert_eq!(p.phase_rad(), 0.0);
    assert_eq!(p.period_s(), 0.0);
    assert_eq!(p.orbital_speed_mps(), 0.0);
}

#[test]
fn required_fields_report_missing() {
    let base = json!({
        "central_body": { "name": "S", "mass_kg": 1.0e30, "radius_m": 7.0e8 },
        "planets": [
            { "name": "A", "kind": "rocky", "mass_kg": 1.0, "radius_m": 1.0, "distance_m": 3.0 }
        ]
    });

    for key in ["name", "kind", "mass_kg", "radius_m", "distance_m"] {
        let mut value = base.clone();
        value["planets"][0].as_object_mut().unwrap().remove(key);
        match SolarSystem::from_value(&value) {
            Err(SystemError::MissingField(field)) => {
                assert_eq!(field, format!("planets[0].{}", key))
            }
            other => panic!("expected missing {}, got {:?}", key, other),
        }
    }

    let mut value = base.clone();
    value.as_object_mut().unwrap().remove("planets");
    assert!(matches!(
        SolarSystem::from_value(&value),
        Err(SystemError::MissingField(f)) if f == "planets"
    ));

    let mut value = base;
    value["central_body"].as_object_mut().unwrap().remove("mass_kg");
    assert!(matches!(
        SolarSystem::from_value(&value),
        Err(SystemError::MissingField(f)) if f == "central_body.mass_kg"
    ));
}

#[test]
fn unknown_kind_and_bad_types_fail() {
    let value = json!({
        "central_body": { "name": "S", "mass_kg": 1.0e30, "radius_m": 7.0e8 },
        "planets": [
            { "name": "A", "kind": "hot_jupiter", "mass_kg": 1.0, "radius_m": 1.0, "distance_m": 3.0 }
        ]
    });
    assert!(matches!(
        SolarSystem::from_value(&value),
        Err(SystemError::UnknownKind(k)) if k == "hot_jupiter"
    ));

    let value = json!({
        "central_body": { "name": "S", "mass_kg": "heavy", "radius_m": 7.0e8 },
        "planets": []
    });
    assert!(matches!(
        SolarSystem::from_value(&value),
        Err(SystemError::Malformed(_))
    ));
}
