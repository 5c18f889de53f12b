//! Collision resolution — decides hit or miss for projectiles arriving this tick.
//!
//! Live projectiles are partitioned into "due now" and "still live" before any
//! mutation. Every due projectile is checked against the same copy of the
//! ship position, so resolution order cannot change the outcome.

use glam::DVec2;
use hecs::{Entity, World};
use log::debug;

use lagshot_core::components::{Health, HitHistory, Live, Projectile};
use lagshot_core::enums::ProjectileStatus;
use lagshot_core::error::SimError;
use lagshot_core::events::{HitRecord, SimEvent};
use lagshot_core::types::Kinematics;

/// Outcome of one projectile at its arrival tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub entity: Entity,
    pub shot_id: u32,
    pub status: ProjectileStatus,
    pub impact_position: DVec2,
    /// Distance from ship center to the impact point.
    pub distance: f64,
}

/// Hit if the impact point is within `ship_radius` of the ship center (inclusive).
pub fn classify(ship_position: DVec2, impact: DVec2, ship_radius: f64) -> (ProjectileStatus, f64) {
    let distance = ship_position.distance(impact);
    let status = if distance <= ship_radius {
        ProjectileStatus::Hit
    } else {
        ProjectileStatus::Miss
    };
    (status, distance)
}

/// Resolve every live projectile whose arrival tick is `current_tick`.
///
/// Returns the number of hits. A live projectile whose arrival tick is already
/// in the past, or a projectile flagged live whose status is not, is an
/// invariant violation.
pub fn run(
    world: &mut World,
    ship: Entity,
    current_tick: u64,
    ship_radius: f64,
    projectile_damage: f64,
    resolved: &mut Vec<Resolution>,
    events: &mut Vec<SimEvent>,
) -> Result<u32, SimError> {
    resolved.clear();

    let ship_position = world
        .get::<&Kinematics>(ship)
        .map_err(|_| SimError::MissingEntity { what: "ship" })?
        .position;

    for (entity, (projectile, _live)) in world.query_mut::<(&Projectile, &Live)>() {
        if projectile.status != ProjectileStatus::Live {
            return Err(SimError::DoubleResolution {
                shot_id: projectile.shot_id,
            });
        }
        if projectile.arrival_tick < current_tick {
            return Err(SimError::UnresolvedProjectile {
                shot_id: projectile.shot_id,
                arrival_tick: projectile.arrival_tick,
                current_tick,
            });
        }
        if projectile.arrival_tick == current_tick {
            let (status, distance) = classify(ship_position, projectile.position, ship_radius);
            resolved.push(Resolution {
                entity,
                shot_id: projectile.shot_id,
                status,
                impact_position: projectile.position,
                distance,
            });
        }
    }
    resolved.sort_by_key(|r| r.shot_id);

    let mut hits = 0;
    for resolution in resolved.iter() {
        {
            let mut projectile = world
                .get::<&mut Projectile>(resolution.entity)
                .map_err(|_| SimError::MissingEntity { what: "projectile" })?;
            projectile.status = resolution.status;
        }
        world
            .remove_one::<Live>(resolution.entity)
            .map_err(|_| SimError::MissingEntity { what: "projectile" })?;

        match resolution.status {
            ProjectileStatus::Hit => {
                hits += 1;
                let mut history = world
                    .get::<&mut HitHistory>(ship)
                    .map_err(|_| SimError::MissingEntity { what: "ship" })?;
                history.records.push(HitRecord {
                    tick: current_tick,
                    impact_position: resolution.impact_position,
                    offset: resolution.distance,
                });
                debug!(
                    "tick {current_tick}: shot {} hit, offset {:.1}",
                    resolution.shot_id, resolution.distance
                );
                events.push(SimEvent::ProjectileHit {
                    shot_id: resolution.shot_id,
                    offset: resolution.distance,
                });
            }
            _ => {
                debug!(
                    "tick {current_tick}: shot {} missed by {:.1}",
                    resolution.shot_id, resolution.distance
                );
                events.push(SimEvent::ProjectileMiss {
                    shot_id: resolution.shot_id,
                    distance: resolution.distance,
                });
            }
        }
    }

    if hits > 0 {
        if let Ok(mut health) = world.get::<&mut Health>(ship) {
            health.current -= projectile_damage * f64::from(hits);
        }
    }

    Ok(hits)
}
