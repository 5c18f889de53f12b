//! Per-tick kinematic history used to reconstruct delayed target state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::types::Kinematics;

/// Append-only log of a body's position, velocity and acceleration.
///
/// Entry `i` is the state recorded at tick `i`. The three sequences always
/// have the same length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    positions: Vec<DVec2>,
    velocities: Vec<DVec2>,
    accelerations: Vec<DVec2>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `ticks` entries.
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            positions: Vec::with_capacity(ticks),
            velocities: Vec::with_capacity(ticks),
            accelerations: Vec::with_capacity(ticks),
        }
    }

    /// Append one snapshot. Called once per tick before anything mutates the body.
    pub fn record(&mut self, state: &Kinematics) {
        self.positions.push(state.position);
        self.velocities.push(state.velocity);
        self.accelerations.push(state.acceleration);
    }

    /// State as it was `ticks_ago` ticks before the newest entry.
    ///
    /// `lookback(0)` is the newest entry. Asking for more history than has
    /// been recorded is an invariant violation and yields
    /// [`SimError::HistoryUnderrun`].
    pub fn lookback(&self, ticks_ago: u64) -> Result<Kinematics, SimError> {
        let available = self.len();
        let underrun = SimError::HistoryUnderrun {
            requested: ticks_ago,
            available,
        };
        let ticks_ago = usize::try_from(ticks_ago).map_err(|_| underrun.clone())?;
        if ticks_ago >= available {
            return Err(underrun);
        }
        Ok(self.entry(available - 1 - ticks_ago))
    }

    /// State recorded at an absolute tick, if it exists.
    pub fn at_tick(&self, tick: u64) -> Option<Kinematics> {
        let index = usize::try_from(tick).ok()?;
        (index < self.len()).then(|| self.entry(index))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    pub fn velocities(&self) -> &[DVec2] {
        &self.velocities
    }

    pub fn accelerations(&self) -> &[DVec2] {
        &self.accelerations
    }

    fn entry(&self, index: usize) -> Kinematics {
        Kinematics {
            position: self.positions[index],
            velocity: self.velocities[index],
            acceleration: self.accelerations[index],
        }
    }
}
