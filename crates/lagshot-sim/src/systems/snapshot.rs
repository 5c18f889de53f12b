//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::{Entity, World};

use lagshot_core::components::*;
use lagshot_core::config::SimConfig;
use lagshot_core::enums::*;
use lagshot_core::events::{HitRecord, SimEvent};
use lagshot_core::state::*;
use lagshot_core::types::{Kinematics, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ship: Entity,
    config: &SimConfig,
    time: &SimTime,
    phase: GamePhase,
    steering: SteeringMode,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let projectiles = build_projectiles(world, config, time.tick);
    let hits = build_hits(world, ship);
    let stats = build_stats(&projectiles, &hits);

    GameStateSnapshot {
        time: *time,
        phase,
        steering,
        ship: build_ship(world, ship, config),
        projectiles,
        hits,
        stats,
        events,
    }
}

/// Ring radius for a live projectile: shrinks from full size as arrival nears.
pub fn display_radius(arrival_tick: u64, current_tick: u64, delay_ticks: u64, radius: f64) -> f64 {
    let remaining = arrival_tick.saturating_sub(current_tick) as f64;
    let scaled = (remaining / delay_ticks.max(1) as f64 * radius).round();
    scaled.max(1.0)
}

fn build_ship(world: &World, ship: Entity, config: &SimConfig) -> ShipView {
    let kinematics = world
        .get::<&Kinematics>(ship)
        .map(|k| *k)
        .unwrap_or_default();
    let helm = world.get::<&Helm>(ship).map(|h| *h).unwrap_or_default();
    let fuel = world.get::<&BoostFuel>(ship).map(|f| *f).unwrap_or_default();
    let health = world.get::<&Health>(ship).ok().map(|h| *h);

    ShipView {
        position: kinematics.position,
        velocity: kinematics.velocity,
        acceleration: kinematics.acceleration,
        speed: kinematics.speed(),
        radius: config.ship_radius,
        turn: helm.turn,
        boosting: helm.boosting,
        boost_fuel: fuel.fuel,
        boost_fuel_cap: fuel.cap,
        health: health.map(|h| h.current),
        max_health: health.map(|h| h.max),
    }
}

/// All projectiles, in fire order.
fn build_projectiles(world: &World, config: &SimConfig, current_tick: u64) -> Vec<ProjectileView> {
    let delay_ticks = config.delay_ticks();
    let mut projectiles: Vec<ProjectileView> = world
        .query::<&Projectile>()
        .iter()
        .map(|(_, p)| ProjectileView {
            shot_id: p.shot_id,
            position: p.position,
            status: p.status,
            fired_tick: p.fired_tick,
            arrival_tick: p.arrival_tick,
            display_radius: match p.status {
                ProjectileStatus::Live => display_radius(
                    p.arrival_tick,
                    current_tick,
                    delay_ticks,
                    config.projectile_radius,
                ),
                ProjectileStatus::Hit | ProjectileStatus::Miss => 0.0,
            },
        })
        .collect();
    projectiles.sort_by_key(|p| p.shot_id);
    projectiles
}

fn build_hits(world: &World, ship: Entity) -> Vec<HitRecord> {
    world
        .get::<&HitHistory>(ship)
        .map(|h| h.records.clone())
        .unwrap_or_default()
}

fn build_stats(projectiles: &[ProjectileView], hits: &[HitRecord]) -> StatsView {
    let shots_fired = projectiles.len() as u32;
    let count = |status: ProjectileStatus| {
        projectiles.iter().filter(|p| p.status == status).count() as u32
    };
    let shots_hit = hits.len() as u32;

    let accuracy_pct = if shots_fired == 0 {
        0.0
    } else {
        f64::from(shots_hit) / f64::from(shots_fired) * 100.0
    };
    let mean_hit_offset = if hits.is_empty() {
        0.0
    } else {
        hits.iter().map(|h| h.offset).sum::<f64>() / hits.len() as f64
    };

    StatsView {
        shots_fired,
        shots_hit,
        shots_missed: count(ProjectileStatus::Miss),
        shots_live: count(ProjectileStatus::Live),
        accuracy_pct,
        mean_hit_offset,
    }
}
