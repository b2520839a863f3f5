//! Central body and planet models.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use helio_core::units::m_to_au;
use helio_core::vector::{self, Vector2};
use helio_orbits::circular_orbit_speed_mps;

use crate::error::ModelError;

/// The static body every planet orbits.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralBody {
    name: String,
    mass_kg: f64,
    radius_m: f64,
    luminosity_w: f64,
}

impl CentralBody {
    /// Create a body with zero luminosity.
    pub fn new(name: impl Into<String>, mass_kg: f64, radius_m: f64) -> Result<Self, ModelError> {
        Ok(Self {
            name: name.into(),
            mass_kg: positive("mass_kg", mass_kg)?,
            radius_m: positive("radius_m", radius_m)?,
            luminosity_w: 0.0,
        })
    }

    pub fn with_luminosity(mut self, luminosity_w: f64) -> Result<Self, ModelError> {
        if !(luminosity_w >= 0.0) {
            return Err(ModelError::Negative {
                field: "luminosity_w",
                value: luminosity_w,
            });
        }
        self.luminosity_w = luminosity_w;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn luminosity_w(&self) -> f64 {
        self.luminosity_w
    }
}

/// Descriptive planet category. Drives presentation only, never motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanetKind {
    Rocky,
    GasGiant,
    IceGiant,
    Dwarf,
}

impl PlanetKind {
    pub const ALL: [PlanetKind; 4] = [
        PlanetKind::Rocky,
        PlanetKind::GasGiant,
        PlanetKind::IceGiant,
        PlanetKind::Dwarf,
    ];

    /// Classify by orbital distance alone.
    pub fn from_distance_au(distance_au: f64) -> Self {
        if distance_au < 2.0 {
            PlanetKind::Rocky
        } else if distance_au < 8.0 {
            PlanetKind::GasGiant
        } else if distance_au < 30.0 {
            PlanetKind::IceGiant
        } else {
            PlanetKind::Dwarf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanetKind::Rocky => "rocky",
            PlanetKind::GasGiant => "gas_giant",
            PlanetKind::IceGiant => "ice_giant",
            PlanetKind::Dwarf => "dwarf",
        }
    }
}

impl fmt::Display for PlanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A planet on a circular orbit around the central body.
///
/// `phase_rad` is always kept in `[0, 2π)`; the only ways to change it are
/// [`Planet::with_phase`] at construction and [`Planet::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    name: String,
    kind: PlanetKind,
    mass_kg: f64,
    radius_m: f64,
    distance_m: f64,
    phase_rad: f64,
    period_s: f64,
    orbital_speed_mps: f64,
}

impl Planet {
    /// Create a planet at phase 0 with no period or speed assigned yet.
    pub fn new(
        name: impl Into<String>,
        kind: PlanetKind,
        mass_kg: f64,
        radius_m: f64,
        distance_m: f64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            name: name.into(),
            kind,
            mass_kg: positive("mass_kg", mass_kg)?,
            radius_m: positive("radius_m", radius_m)?,
            distance_m: positive("distance_m", distance_m)?,
            phase_rad: 0.0,
            period_s: 0.0,
            orbital_speed_mps: 0.0,
        })
    }

    /// Set the starting phase, wrapped into `[0, 2π)`.
    pub fn with_phase(mut self, phase_rad: f64) -> Result<Self, ModelError> {
        self.phase_rad = normalize_phase(finite("phase_rad", phase_rad)?);
        Ok(self)
    }

    /// Set the orbital period. A zero period is stored as-is; stepping such a
    /// planet fails until it is rebuilt with a positive one.
    pub fn with_period(mut self, period_s: f64) -> Result<Self, ModelError> {
        if finite("period_s", period_s)? < 0.0 {
            return Err(ModelError::Negative {
                field: "period_s",
                value: period_s,
            });
        }
        self.period_s = period_s;
        Ok(self)
    }

    pub fn with_orbital_speed(mut self, orbital_speed_mps: f64) -> Result<Self, ModelError> {
        self.orbital_speed_mps = finite("orbital_speed_mps", orbital_speed_mps)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlanetKind {
        self.kind
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }

    pub fn distance_m(&self) -> f64 {
        self.distance_m
    }

    pub fn distance_au(&self) -> f64 {
        m_to_au(self.distance_m)
    }

    pub fn phase_rad(&self) -> f64 {
        self.phase_rad
    }

    pub fn period_s(&self) -> f64 {
        self.period_s
    }

    /// Informational only; stepping never reads it.
    pub fn orbital_speed_mps(&self) -> f64 {
        self.orbital_speed_mps
    }

    /// Angular speed ω = 2π / T (rad/s).
    pub fn angular_speed_rad_s(&self) -> Result<f64, ModelError> {
        if !(self.period_s > 0.0) {
            return Err(ModelError::NonPositivePeriod {
                name: self.name.clone(),
                period_s: self.period_s,
            });
        }
        Ok(TAU / self.period_s)
    }

    /// Cartesian position (m) on the orbital plane.
    pub fn position_m(&self) -> Vector2 {
        vector::polar(self.distance_m, self.phase_rad)
    }

    /// Advance the phase by `dt_s` seconds of orbital motion.
    pub fn step(&mut self, dt_s: f64) -> Result<(), ModelError> {
        time_step(dt_s)?;
        let omega = self.angular_speed_rad_s()?;
        self.phase_rad = normalize_phase(self.phase_rad + omega * dt_s);
        Ok(())
    }

    /// Recompute `orbital_speed_mps` as 2π·r / T.
    pub fn recalc_speed_from_period(&mut self) -> Result<(), ModelError> {
        if !(self.period_s > 0.0) {
            return Err(ModelError::NonPositivePeriod {
                name: self.name.clone(),
                period_s: self.period_s,
            });
        }
        self.orbital_speed_mps = circular_orbit_speed_mps(self.distance_m, self.period_s)?;
        Ok(())
    }
}

/// Wrap an angle into `[0, 2π)`.
///
/// `rem_euclid` can round up to exactly 2π for tiny negative inputs.
fn normalize_phase(phase_rad: f64) -> f64 {
    let wrapped = phase_rad.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Accept `dt_s` only when it is finite and non-negative.
pub(crate) fn time_step(dt_s: f64) -> Result<f64, ModelError> {
    if !(dt_s >= 0.0) {
        return Err(ModelError::NegativeTimeStep(dt_s));
    }
    finite("dt_s", dt_s)
}

fn positive(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::NonPositive { field, value })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ModelError::NonFinite { field, value })
    }
}
