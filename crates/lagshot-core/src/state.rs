//! Game state snapshot — the complete visible state handed to presentation each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{HitRecord, SimEvent};
use crate::types::SimTime;

/// Complete engagement state after a step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    /// Pinned to the tick of destruction once the engagement is ending.
    pub time: SimTime,
    pub phase: GamePhase,
    pub steering: SteeringMode,
    pub ship: ShipView,
    /// All projectiles fired this engagement, in fire order.
    pub projectiles: Vec<ProjectileView>,
    pub hits: Vec<HitRecord>,
    pub stats: StatsView,
    /// Events produced by the step that built this snapshot.
    pub events: Vec<SimEvent>,
}

/// Ship state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub speed: f64,
    pub radius: f64,
    pub turn: TurnDirection,
    pub boosting: bool,
    pub boost_fuel: f64,
    pub boost_fuel_cap: f64,
    pub health: Option<f64>,
    pub max_health: Option<f64>,
}

/// One projectile for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub shot_id: u32,
    pub position: DVec2,
    pub status: ProjectileStatus,
    pub fired_tick: u64,
    pub arrival_tick: u64,
    /// Ring radius that shrinks toward arrival while live.
    pub display_radius: f64,
}

/// Running accuracy statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub shots_fired: u32,
    pub shots_hit: u32,
    pub shots_missed: u32,
    pub shots_live: u32,
    /// Hits as a percentage of shots fired; 0 before the first shot.
    pub accuracy_pct: f64,
    /// Mean distance from ship center over all hits; 0 without hits.
    pub mean_hit_offset: f64,
}
