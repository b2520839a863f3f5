//! Fixed-step driver that accumulates simulated time.

use std::collections::BTreeMap;

use helio_core::vector::Vector2;
use tracing::trace;

use crate::error::ModelError;
use crate::system::SolarSystem;

/// Owns a [`SolarSystem`] and the simulated time elapsed on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    system: SolarSystem,
    time_s: f64,
}

/// Planet positions after an advance, stamped with the driver time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub time_s: f64,
    pub positions: BTreeMap<String, Vector2>,
}

impl Simulation {
    pub fn new(system: SolarSystem) -> Self {
        Self {
            system,
            time_s: 0.0,
        }
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn into_system(self) -> SolarSystem {
        self.system
    }

    /// Simulated seconds elapsed since construction.
    pub fn time_s(&self) -> f64 {
        self.time_s
    }

    /// Advance the system by `dt_s`. Time only moves once the system step succeeds.
    pub fn step(&mut self, dt_s: f64) -> Result<(), ModelError> {
        self.system.step(dt_s)?;
        self.time_s += dt_s;
        trace!(time_s = self.time_s, dt_s, "simulation advanced");
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time_s: self.time_s,
            positions: self.system.state_m(),
        }
    }

    /// Unbounded pull-based stream: each `next()` advances by `dt_s` and then
    /// yields the new state.
    pub fn iter_steps(&mut self, dt_s: f64) -> Steps<'_> {
        Steps {
            simulation: self,
            dt_s,
            failed: false,
        }
    }
}

/// Iterator returned by [`Simulation::iter_steps`].
///
/// Never ends on its own. After yielding an error it yields nothing more.
#[derive(Debug)]
pub struct Steps<'a> {
    simulation: &'a mut Simulation,
    dt_s: f64,
    failed: bool,
}

impl Iterator for Steps<'_> {
    type Item = Result<Snapshot, ModelError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.simulation.step(self.dt_s) {
            Ok(()) => Some(Ok(self.simulation.snapshot())),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Steps<'_> {}
