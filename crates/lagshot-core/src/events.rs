//! Events emitted by the simulation for presentation feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::TurnDirection;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Autopilot picked a new turn direction.
    CourseChange { turn: TurnDirection },
    /// The turret fired a volley.
    VolleyFired { shots: u32, arrival_tick: u64 },
    /// A projectile landed on the ship.
    ProjectileHit { shot_id: u32, offset: f64 },
    /// A projectile landed away from the ship.
    ProjectileMiss { shot_id: u32, distance: f64 },
    /// Ship health reached zero.
    ShipDestroyed { tick: u64 },
}

/// Record of a projectile that struck the ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    pub tick: u64,
    pub impact_position: DVec2,
    /// Distance between ship center and impact point at resolution.
    pub offset: f64,
}
