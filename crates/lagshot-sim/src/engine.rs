//! Simulation engine — the delayed-information engagement core.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! and single-threaded; the caller paces it one tick per step.

use std::collections::VecDeque;

use hecs::World;
use log::{info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use lagshot_core::commands::{PlayerCommand, ShipInput};
use lagshot_core::components::Health;
use lagshot_core::config::SimConfig;
use lagshot_core::enums::{GamePhase, SteeringMode};
use lagshot_core::error::SimError;
use lagshot_core::events::SimEvent;
use lagshot_core::history::HistoryLog;
use lagshot_core::state::GameStateSnapshot;
use lagshot_core::types::{Kinematics, SimTime};

use crate::systems;
use crate::systems::collision::Resolution;
use crate::world_setup::{self, EngagementEntities};

/// The simulation engine. Owns the ECS world and all engagement state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    entities: EngagementEntities,
    time: SimTime,
    phase: GamePhase,
    steering: SteeringMode,
    rng: ChaCha8Rng,
    next_shot_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    resolve_buffer: Vec<Resolution>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine seeded from `config.seed`. Fails on invalid configuration.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create an engine drawing all randomness from `rng`.
    pub fn with_rng(config: SimConfig, rng: ChaCha8Rng) -> Result<Self, SimError> {
        config.validate()?;
        let mut world = World::new();
        let entities = world_setup::setup_engagement(&mut world, &config);
        Ok(Self {
            world,
            steering: config.steering,
            config,
            entities,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            next_shot_id: 0,
            command_queue: VecDeque::new(),
            resolve_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance one tick with the given ship input and return the resulting snapshot.
    ///
    /// Outside the `Playing` phase only queued commands are processed.
    pub fn step(&mut self, input: &ShipInput) -> Result<GameStateSnapshot, SimError> {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems(input)?;
            if self.phase == GamePhase::Playing {
                self.time.advance(self.config.dt());
            }
        }

        Ok(self.snapshot())
    }

    /// Advance one tick with neutral input.
    pub fn tick(&mut self) -> Result<GameStateSnapshot, SimError> {
        self.step(&ShipInput::default())
    }

    /// Build a snapshot of the current state, draining pending events.
    pub fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.entities.ship,
            &self.config,
            &self.time,
            self.phase,
            self.steering,
            events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn steering(&self) -> SteeringMode {
        self.steering
    }

    /// Current ship kinematics.
    pub fn ship_kinematics(&self) -> Result<Kinematics, SimError> {
        self.world
            .get::<&Kinematics>(self.entities.ship)
            .map(|k| *k)
            .map_err(|_| SimError::MissingEntity { what: "ship" })
    }

    /// Ship state `ticks_ago` ticks before the newest history entry.
    pub fn lookback(&self, ticks_ago: u64) -> Result<Kinematics, SimError> {
        self.world
            .get::<&HistoryLog>(self.entities.ship)
            .map_err(|_| SimError::MissingEntity { what: "ship" })?
            .lookback(ticks_ago)
    }

    /// Mutable world access for tests that need to plant entities directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartEngagement => {
                if self.phase == GamePhase::Starting {
                    info!(
                        "engagement started: delay {}s ({} ticks), projectile speed {}",
                        self.config.propagation_delay_secs,
                        self.config.delay_ticks(),
                        self.config.projectile_speed_fraction
                    );
                    self.phase = GamePhase::Playing;
                } else {
                    warn!("StartEngagement ignored in phase {:?}", self.phase);
                }
            }
            PlayerCommand::Retry => {
                if self.phase == GamePhase::Ending {
                    self.reset();
                    info!("engagement restarted");
                    self.phase = GamePhase::Playing;
                } else {
                    warn!("Retry ignored in phase {:?}", self.phase);
                }
            }
            PlayerCommand::Quit => {
                if self.phase != GamePhase::Terminated {
                    info!("engagement terminated at tick {}", self.time.tick);
                    self.phase = GamePhase::Terminated;
                }
            }
            PlayerCommand::SetSteeringMode { mode } => {
                self.steering = mode;
            }
        }
    }

    /// Rebuild ship, turret and projectiles from the configuration.
    /// The RNG stream continues.
    fn reset(&mut self) {
        self.entities = world_setup::setup_engagement(&mut self.world, &self.config);
        self.time = SimTime::default();
        self.next_shot_id = 0;
        self.events.clear();
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &ShipInput) -> Result<(), SimError> {
        let tick = self.time.tick;
        let EngagementEntities { ship, turret } = self.entities;

        // 1. Record the pre-tick snapshot
        systems::history::run(&mut self.world, ship)?;
        // 2. Steering decision
        let steering = systems::steering::run(
            &mut self.world,
            ship,
            self.steering,
            input,
            &self.config,
            tick,
            &mut self.rng,
            &mut self.events,
        )?;
        // 3. Fire control on delayed data
        systems::fire_control::run(
            &mut self.world,
            turret,
            ship,
            &self.config,
            tick,
            &mut self.rng,
            &mut self.next_shot_id,
            &mut self.events,
        )?;
        // 4. Kinematic integration
        systems::kinematics::run(
            &mut self.world,
            ship,
            self.config.dt(),
            steering.turn,
            self.config.rotation_speed_deg,
            steering.boost_multiplier,
        )?;
        // 5. Resolve arrivals against the post-move position
        systems::collision::run(
            &mut self.world,
            ship,
            tick,
            self.config.ship_radius,
            self.config.projectile_damage,
            &mut self.resolve_buffer,
            &mut self.events,
        )?;
        // 6. End on destruction
        self.check_destroyed(tick);
        Ok(())
    }

    fn check_destroyed(&mut self, tick: u64) {
        let destroyed = self
            .world
            .get::<&Health>(self.entities.ship)
            .map(|h| h.current <= 0.0)
            .unwrap_or(false);
        if destroyed {
            info!("ship destroyed at tick {tick}");
            self.events.push(SimEvent::ShipDestroyed { tick });
            self.phase = GamePhase::Ending;
        }
    }
}
