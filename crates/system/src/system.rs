//! The heliocentric system container.

use std::collections::BTreeMap;

use helio_core::vector::Vector2;
use serde_json::Value;

use crate::body::{self, CentralBody, Planet};
use crate::error::{ModelError, SystemError};
use crate::record;

/// One central body and the ordered planets orbiting it.
///
/// Planet order carries no physical meaning; it fixes iteration and output order.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystem {
    central_body: CentralBody,
    planets: Vec<Planet>,
}

impl SolarSystem {
    pub fn new(central_body: CentralBody, planets: Vec<Planet>) -> Self {
        Self {
            central_body,
            planets,
        }
    }

    /// Build from any iterable of planets, preserving its order.
    pub fn from_planets<I>(central_body: CentralBody, planets: I) -> Self
    where
        I: IntoIterator<Item = Planet>,
    {
        Self::new(central_body, planets.into_iter().collect())
    }

    pub fn central_body(&self) -> &CentralBody {
        &self.central_body
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    /// First planet named `name`, if any.
    pub fn planet(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Advance every planet by `dt_s` seconds.
    ///
    /// `dt_s` is checked up front, so an empty system rejects it too.
    /// Stops at the first failing planet; planets before it stay advanced.
    pub fn step(&mut self, dt_s: f64) -> Result<(), ModelError> {
        body::time_step(dt_s)?;
        for planet in &mut self.planets {
            planet.step(dt_s)?;
        }
        Ok(())
    }

    /// Current planet positions keyed by name. Later planets win on name collisions.
    pub fn state_m(&self) -> BTreeMap<String, Vector2> {
        let mut state = BTreeMap::new();
        for planet in &self.planets {
            state.insert(planet.name().to_string(), planet.position_m());
        }
        state
    }

    /// Serialize every field into a JSON value.
    pub fn to_value(&self) -> Value {
        record::to_value(self)
    }

    /// Rebuild a system from the output of [`SolarSystem::to_value`].
    ///
    /// `luminosity_w`, `phase_rad`, `period_s` and `orbital_speed_mps` default
    /// to 0.0 when absent; every other field is required.
    pub fn from_value(value: &Value) -> Result<Self, SystemError> {
        record::from_value(value)
    }
}
