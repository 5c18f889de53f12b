//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. [`Kinematics`](crate::types::Kinematics)
//! and [`HistoryLog`](crate::history::HistoryLog) are also attached to the ship.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::HitRecord;

/// Marks the evading ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// Ship steering state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Helm {
    /// Turn direction applied during the most recent integration.
    pub turn: TurnDirection,
    /// Tick at which the autopilot next re-rolls its turn.
    pub next_course_change: u64,
    /// Whether boost was applied during the most recent integration.
    pub boosting: bool,
}

/// Boost tank.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BoostFuel {
    pub fuel: f64,
    pub cap: f64,
}

/// Ship hit points, present only when health is modeled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Every hit the ship has taken, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HitHistory {
    pub records: Vec<HitRecord>,
}

/// The stationary weapon platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    /// Minimum ticks between volleys.
    pub shot_delay_ticks: u64,
    /// Shots per volley.
    pub volley_size: u32,
    /// Next tick at which the turret may fire.
    pub next_shot_tick: u64,
}

/// A fired shot. Its position is fixed at creation; only the status changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Sequential id in fire order.
    pub shot_id: u32,
    pub position: DVec2,
    pub fired_tick: u64,
    /// Tick at which the hit/miss outcome is decided.
    pub arrival_tick: u64,
    pub status: ProjectileStatus,
}

/// Marks a projectile that has not been resolved yet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Live;
