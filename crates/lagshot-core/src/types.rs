//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Kinematic state of a body in the engagement plane.
///
/// Positions are in distance units (the source game used pixels = meters),
/// velocities in units/s and accelerations in units/s².
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Thrust vector. Its magnitude only changes on construction; steering
    /// rotates it.
    pub acceleration: DVec2,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Kinematics {
    pub fn new(position: DVec2, velocity: DVec2, acceleration: DVec2) -> Self {
        Self {
            position,
            velocity,
            acceleration,
        }
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }
}

impl SimTime {
    /// Advance by one tick of length `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f64 * dt;
    }
}
