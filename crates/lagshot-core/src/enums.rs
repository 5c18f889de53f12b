//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Resolution status of a fired projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileStatus {
    /// In flight, awaiting its arrival tick.
    #[default]
    Live,
    /// Landed within the ship radius at arrival.
    Hit,
    /// Landed outside the ship radius at arrival.
    Miss,
}

/// Engagement phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the engagement to start.
    #[default]
    Starting,
    /// Simulation advancing one tick per step.
    Playing,
    /// Ship destroyed; simulation frozen until retry or quit.
    Ending,
    /// No further steps will change state.
    Terminated,
}

/// Who decides the ship's turn direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteeringMode {
    /// Random evasive turns, re-rolled once per propagation delay.
    #[default]
    Autopilot,
    /// Turn and boost taken from per-tick input.
    Manual,
}

/// Rotation applied to the ship's thrust vector this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    Clockwise,
    #[default]
    Straight,
    CounterClockwise,
}

impl TurnDirection {
    /// Sign of the rotation: -1, 0 or +1.
    pub fn sign(self) -> f64 {
        match self {
            TurnDirection::Clockwise => -1.0,
            TurnDirection::Straight => 0.0,
            TurnDirection::CounterClockwise => 1.0,
        }
    }
}
