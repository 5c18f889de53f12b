//! Fire control system — gates the turret, aims volleys at delayed data, spawns projectiles.
//!
//! The turret idles until `next_shot_tick`. It can never fire before
//! `delay_ticks` have elapsed, because until then no delayed snapshot exists.
//! Every shot in a volley is aimed independently from the same snapshot.

use hecs::{Entity, World};
use log::debug;
use rand_chacha::ChaCha8Rng;

use lagshot_core::components::{Live, Projectile, Turret};
use lagshot_core::config::SimConfig;
use lagshot_core::enums::ProjectileStatus;
use lagshot_core::error::SimError;
use lagshot_core::events::SimEvent;
use lagshot_core::history::HistoryLog;

use crate::targeting;

/// Whether the turret may fire on `current_tick`.
pub fn is_ready(turret: &Turret, current_tick: u64, delay_ticks: u64) -> bool {
    current_tick >= delay_ticks && current_tick >= turret.next_shot_tick
}

/// Run the fire control system for one tick. Returns the number of shots fired.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    turret_entity: Entity,
    ship: Entity,
    config: &SimConfig,
    current_tick: u64,
    rng: &mut ChaCha8Rng,
    next_shot_id: &mut u32,
    events: &mut Vec<SimEvent>,
) -> Result<u32, SimError> {
    let delay_ticks = config.delay_ticks();

    let volley_size = {
        let turret = world
            .get::<&Turret>(turret_entity)
            .map_err(|_| SimError::MissingEntity { what: "turret" })?;
        if !is_ready(&turret, current_tick, delay_ticks) {
            return Ok(0);
        }
        turret.volley_size
    };

    // What the turret sees now: the ship as it was `delay_ticks` ago.
    let delayed = world
        .get::<&HistoryLog>(ship)
        .map_err(|_| SimError::MissingEntity { what: "ship" })?
        .lookback(delay_ticks)?;

    let mut arrival_tick = current_tick;
    for _ in 0..volley_size {
        let solution = targeting::aim(config, current_tick, &delayed, rng);
        arrival_tick = solution.arrival_tick;
        world.spawn((
            Projectile {
                shot_id: *next_shot_id,
                position: solution.aim_point,
                fired_tick: current_tick,
                arrival_tick: solution.arrival_tick,
                status: ProjectileStatus::Live,
            },
            Live,
        ));
        *next_shot_id += 1;
    }

    let mut turret = world
        .get::<&mut Turret>(turret_entity)
        .map_err(|_| SimError::MissingEntity { what: "turret" })?;
    let next_shot_tick = current_tick.saturating_add(turret.shot_delay_ticks);
    turret.next_shot_tick = next_shot_tick;

    debug!(
        "tick {current_tick}: volley of {volley_size} fired at delayed position {}, arriving at tick {arrival_tick}",
        delayed.position
    );
    events.push(SimEvent::VolleyFired {
        shots: volley_size,
        arrival_tick,
    });
    Ok(volley_size)
}
