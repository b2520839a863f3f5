use helioforge::constants::{AU_M, DAY_S, YEAR_S};
use helioforge::system::{PlanetKind, make_solar_system};

#[test]
fn earth_period_is_about_one_year() {
    let system = make_solar_system().unwrap();
    let earth = system.planet("Earth").expect("earth");
    assert!(
        ((earth.period_s() - YEAR_S) / YEAR_S).abs() < 0.02,
        "period = {} s",
        earth.period_s()
    );
    assert!((earth.distance_m() - AU_M).abs() < 1.0);
}

#[test]
fn stepping_a_day_moves_earth() {
    let mut system = make_solar_system().unwrap();
    let before = system.planet("Earth").unwrap().phase_rad();
    system.step(DAY_S).unwrap();
    let after = system.planet("Earth").unwrap().phase_rad();
    assert_ne!(before, after);
    let expected = std::f64::consts::TAU / 365.25;
    assert!((after - before - expected).abs() < 1e-4);
}

#[test]
fn preset_contents() {
    let system = make_solar_system().unwrap();
    assert_eq!(system.central_body().name(), "Sun");
    assert!(system.central_body().luminosity_w() > 3.0e26);
    let names: Vec<&str> = system.planets().iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
    );
    for pair in system.planets().windows(2) {
        assert!(pair[0].distance_m() < pair[1].distance_m());
        assert!(pair[0].period_s() < pair[1].period_s());
    }
    assert_eq!(system.planet("Jupiter").unwrap().kind(), PlanetKind::GasGiant);
    assert_eq!(system.planet("Neptune").unwrap().kind(), PlanetKind::IceGiant);
    assert!(system.planets().iter().all(|p| p.phase_rad() == 0.0));
    assert!(system.planets().iter().all(|p| p.orbital_speed_mps() > 0.0));
}

#[test]
fn jupiter_period_is_about_twelve_years() {
    let system = make_solar_system().unwrap();
    let years = system.planet("Jupiter").unwrap().period_s() / YEAR_S;
    assert!((years - 11.86).abs() < 0.1, "years = {}", years);
}
