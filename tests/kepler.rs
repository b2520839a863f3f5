use std::f64::consts::TAU;

use helioforge::constants::{AU_M, G};
use helioforge::kepler::{
    AcceleratedBackend, BackendPreference, Kepler, KeplerBackend, KeplerError,
    circular_orbit_speed_mps, kepler_period_s,
};

const SUN_MASS: f64 = 1.9885e30;

fn reference_period(a: f64, m: f64) -> f64 {
    TAU * (a.powi(3) / (G * m)).sqrt()
}

fn reference_speed(r: f64, m: f64) -> f64 {
    (G * m / r).sqrt()
}

fn rel(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}

#[test]
fn reference_backend_matches_closed_form() {
    for mass in [1.0e24, 1.0e30, SUN_MASS, 4.0e31] {
        let k = Kepler::with_preference(mass, BackendPreference::Reference).unwrap();
        assert_eq!((k.backend_name(), k.central_mass_kg()), ("reference", mass));
        for au in [0.01, 0.5, 1.0, 9.58, 40.0, 250.0] {
            let a = au * AU_M;
            assert!(rel(k.period_s(a).unwrap(), reference_period(a, mass)) < 1e-12);
            assert!(rel(k.circular_speed_mps(a).unwrap(), reference_speed(a, mass)) < 1e-12);
        }
    }
}

#[test]
fn selected_backend_agrees_within_tolerance() {
    let k = Kepler::new(SUN_MASS).unwrap();
    for au in [0.05, 1.0, 5.2, 30.0] {
        let a = au * AU_M;
        assert!(rel(k.period_s(a).unwrap(), reference_period(a, SUN_MASS)) < 1e-10);
        assert!(rel(k.circular_speed_mps(a).unwrap(), reference_speed(a, SUN_MASS)) < 1e-10);
    }
}

#[test]
fn auto_selection_follows_probe() {
    let k = Kepler::new(SUN_MASS).unwrap();
    assert_eq!(k.central_mass_kg(), SUN_MASS);
    let probed = AcceleratedBackend::probe(SUN_MASS);
    assert_eq!(k.is_accelerated(), probed.is_some());
    if let Some(fast) = probed {
        let a = AU_M;
        assert!(rel(fast.period_s(a), reference_period(a, SUN_MASS)) < 1e-10);
        assert!(rel(fast.mu(), G * SUN_MASS) < 1e-15);
    }
}

#[test]
fn earth_year_from_sun_mass() {
    let k = Kepler::new(SUN_MASS).unwrap();
    let days = k.period_s(AU_M).unwrap() / 86_400.0;
    assert!((days - 365.25).abs() < 1.0, "days = {}", days);
    let v = k.circular_speed_mps(AU_M).unwrap();
    assert!((v - 29_780.0).abs() < 100.0, "v = {}", v);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert_eq!(
        Kepler::new(0.0).unwrap_err(),
        KeplerError::NonPositiveCentralMass(0.0)
    );
    assert!(Kepler::new(-1.0).is_err());

    let k = Kepler::new(SUN_MASS).unwrap();
    assert_eq!(k.period_s(0.0), Err(KeplerError::NonPositiveDistance(0.0)));
    assert!(k.period_s(-AU_M).is_err());
    assert!(k.circular_speed_mps(0.0).is_err());
    assert!(k.circular_speed_mps(-1.0).is_err());

    assert!(kepler_period_s(AU_M, 0.0).is_err());
    assert!(kepler_period_s(0.0, SUN_MASS).is_err());
    assert!(circular_orbit_speed_mps(AU_M, 0.0).is_err());
}

#[test]
fn free_helpers_are_consistent() {
    let period = kepler_period_s(AU_M, SUN_MASS).unwrap();
    assert!(rel(period, reference_period(AU_M, SUN_MASS)) < 1e-12);
    // For a circular orbit 2πr/T equals sqrt(GM/r).
    let v = circular_orbit_speed_mps(AU_M, period).unwrap();
    assert!(rel(v, reference_speed(AU_M, SUN_MASS)) < 1e-12);
}
