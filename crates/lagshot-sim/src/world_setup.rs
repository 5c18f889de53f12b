//! Entity spawn factories for setting up the engagement world.

use glam::DVec2;
use hecs::{Entity, EntityBuilder, World};

use lagshot_core::components::*;
use lagshot_core::config::SimConfig;
use lagshot_core::history::HistoryLog;
use lagshot_core::types::Kinematics;

/// Handles to the two long-lived entities of an engagement.
#[derive(Debug, Clone, Copy)]
pub struct EngagementEntities {
    pub ship: Entity,
    pub turret: Entity,
}

/// Clear the world and spawn a fresh ship and turret.
pub fn setup_engagement(world: &mut World, config: &SimConfig) -> EngagementEntities {
    world.clear();
    EngagementEntities {
        ship: spawn_ship(world, config),
        turret: spawn_turret(world, config),
    }
}

/// Spawn the ship at its start position, thrusting along +x.
pub fn spawn_ship(world: &mut World, config: &SimConfig) -> Entity {
    let kinematics = Kinematics::new(
        config.ship_start_position,
        config.ship_start_velocity,
        DVec2::new(config.ship_acceleration, 0.0),
    );

    let mut builder = EntityBuilder::new();
    builder
        .add(Ship)
        .add(kinematics)
        .add(HistoryLog::new())
        .add(Helm::default())
        .add(BoostFuel {
            fuel: config.boost_fuel_cap,
            cap: config.boost_fuel_cap,
        })
        .add(HitHistory::default());
    if let Some(max) = config.starting_health {
        builder.add(Health { current: max, max });
    }
    world.spawn(builder.build())
}

/// Spawn the turret. Its first eligible shot is one propagation delay in.
pub fn spawn_turret(world: &mut World, config: &SimConfig) -> Entity {
    world.spawn((Turret {
        shot_delay_ticks: config.shot_delay_ticks(),
        volley_size: config.volley_size,
        next_shot_tick: config.delay_ticks(),
    },))
}
