//! Engagement configuration, read once at engine construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::SteeringMode;
use crate::error::SimError;

/// Every tunable parameter of an engagement.
///
/// Missing fields in serialized form fall back to the defaults in
/// [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input = same engagement.
    pub seed: u64,
    pub steering: SteeringMode,
    pub ticks_per_second: f64,
    /// One-way turret-to-ship delay in seconds.
    pub propagation_delay_secs: f64,
    /// Projectile speed as a fraction of the propagation speed, in (0, 1].
    pub projectile_speed_fraction: f64,
    pub shot_delay_secs: f64,
    pub volley_size: u32,
    /// Scatter distance per second of propagation delay.
    pub max_scatter_distance: f64,
    pub ship_acceleration: f64,
    pub rotation_speed_deg: f64,
    pub ship_radius: f64,
    pub projectile_radius: f64,
    pub ship_start_position: DVec2,
    pub ship_start_velocity: DVec2,
    pub boost_multiplier: f64,
    /// Zero disables boosting.
    pub boost_fuel_cap: f64,
    pub boost_regen_per_tick: f64,
    pub boost_cost_per_tick: f64,
    pub projectile_damage: f64,
    /// `None` means the ship cannot be destroyed.
    pub starting_health: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            steering: SteeringMode::default(),
            ticks_per_second: TICK_RATE,
            propagation_delay_secs: PROPAGATION_DELAY_SECS,
            projectile_speed_fraction: PROJECTILE_SPEED_FRACTION,
            shot_delay_secs: SHOT_DELAY_SECS,
            volley_size: VOLLEY_SIZE,
            max_scatter_distance: MAX_SCATTER_DISTANCE,
            ship_acceleration: SHIP_ACCELERATION,
            rotation_speed_deg: SHIP_ROTATION_SPEED_DEG,
            ship_radius: SHIP_RADIUS,
            projectile_radius: PROJECTILE_RADIUS,
            ship_start_position: DVec2::ZERO,
            ship_start_velocity: DVec2::new(SHIP_START_SPEED, 0.0),
            boost_multiplier: BOOST_MULTIPLIER,
            boost_fuel_cap: BOOST_FUEL_CAP,
            boost_regen_per_tick: BOOST_REGEN_PER_TICK,
            boost_cost_per_tick: BOOST_COST_PER_TICK,
            projectile_damage: PROJECTILE_DAMAGE,
            starting_health: None,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: SimConfig = serde_json::from_str(json)
            .map_err(|e| SimError::invalid_config("json", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters the engine cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.ticks_per_second.is_finite() && self.ticks_per_second > 0.0) {
            return Err(SimError::invalid_config(
                "ticks_per_second",
                format!("must be positive, got {}", self.ticks_per_second),
            ));
        }
        if !(self.projectile_speed_fraction > 0.0 && self.projectile_speed_fraction <= 1.0) {
            return Err(SimError::invalid_config(
                "projectile_speed_fraction",
                format!("must be in (0, 1], got {}", self.projectile_speed_fraction),
            ));
        }
        if self.volley_size == 0 {
            return Err(SimError::invalid_config("volley_size", "must be at least 1"));
        }
        if !(self.boost_multiplier.is_finite() && self.boost_multiplier >= 1.0) {
            return Err(SimError::invalid_config(
                "boost_multiplier",
                format!("must be at least 1, got {}", self.boost_multiplier),
            ));
        }
        if let Some(health) = self.starting_health {
            if !(health.is_finite() && health > 0.0) {
                return Err(SimError::invalid_config(
                    "starting_health",
                    format!("must be positive, got {health}"),
                ));
            }
        }

        let non_negative = [
            ("propagation_delay_secs", self.propagation_delay_secs),
            ("shot_delay_secs", self.shot_delay_secs),
            ("max_scatter_distance", self.max_scatter_distance),
            ("ship_acceleration", self.ship_acceleration),
            ("rotation_speed_deg", self.rotation_speed_deg),
            ("ship_radius", self.ship_radius),
            ("projectile_radius", self.projectile_radius),
            ("boost_fuel_cap", self.boost_fuel_cap),
            ("boost_regen_per_tick", self.boost_regen_per_tick),
            ("boost_cost_per_tick", self.boost_cost_per_tick),
            ("projectile_damage", self.projectile_damage),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimError::invalid_config(
                    field,
                    format!("must be non-negative, got {value}"),
                ));
            }
        }

        if !self.ship_start_position.is_finite() || !self.ship_start_velocity.is_finite() {
            return Err(SimError::invalid_config(
                "ship_start",
                "start position and velocity must be finite",
            ));
        }

        let delay_ticks = self.propagation_delay_secs * self.ticks_per_second;
        let schedule = [
            ("propagation_delay_secs", delay_ticks),
            ("shot_delay_secs", self.shot_delay_secs * self.ticks_per_second),
            (
                "projectile_speed_fraction",
                delay_ticks.round() / self.projectile_speed_fraction,
            ),
        ];
        for (field, ticks) in schedule {
            if !(ticks.is_finite() && ticks.round() <= MAX_SCHEDULE_TICKS as f64) {
                return Err(SimError::invalid_config(
                    field,
                    format!("spans {ticks} ticks, limit is {MAX_SCHEDULE_TICKS}"),
                ));
            }
        }
        if !self.total_delay_secs().is_finite() {
            return Err(SimError::invalid_config(
                "projectile_speed_fraction",
                "total delay overflows",
            ));
        }
        Ok(())
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.ticks_per_second
    }

    /// Convert a duration in seconds to whole ticks.
    pub fn secs_to_ticks(&self, secs: f64) -> u64 {
        (secs * self.ticks_per_second).round() as u64
    }

    /// One-way propagation delay in ticks.
    pub fn delay_ticks(&self) -> u64 {
        self.secs_to_ticks(self.propagation_delay_secs)
    }

    /// Minimum ticks between volleys.
    pub fn shot_delay_ticks(&self) -> u64 {
        self.secs_to_ticks(self.shot_delay_secs)
    }

    /// Projectile flight time in ticks.
    pub fn travel_ticks(&self) -> u64 {
        (self.delay_ticks() as f64 / self.projectile_speed_fraction).round() as u64
    }

    /// Sensing delay plus projectile flight time, in seconds.
    ///
    /// Both legs are charged from the configured base delay, not from the
    /// actual range at fire time.
    pub fn total_delay_secs(&self) -> f64 {
        self.propagation_delay_secs * (1.0 + 1.0 / self.projectile_speed_fraction)
    }

    /// Ticks between autopilot course changes.
    pub fn autopilot_interval_ticks(&self) -> u64 {
        self.delay_ticks().max(1)
    }

    /// Rotation speed in radians per second.
    pub fn rotation_speed_rad(&self) -> f64 {
        self.rotation_speed_deg.to_radians()
    }

    pub fn boost_enabled(&self) -> bool {
        self.boost_fuel_cap > 0.0
    }
}
