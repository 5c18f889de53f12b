//! Player commands and per-tick input sent to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Ship input is
//! sampled every tick and only read in manual steering mode.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Engagement-level actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the start screen and begin ticking.
    StartEngagement,
    /// Rebuild the engagement after the ship was destroyed.
    Retry,
    /// Stop the engagement for good.
    Quit,
    /// Switch between autopilot and manual steering.
    SetSteeringMode { mode: SteeringMode },
}

/// Steering input for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipInput {
    pub turn: TurnDirection,
    /// Request the boost multiplier for this tick's integration.
    pub boost: bool,
}

impl ShipInput {
    pub fn turning(turn: TurnDirection) -> Self {
        Self { turn, boost: false }
    }

    pub fn boosting(turn: TurnDirection) -> Self {
        Self { turn, boost: true }
    }
}
