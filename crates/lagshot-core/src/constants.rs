//! Default tuning parameters.
//!
//! These seed [`SimConfig::default`](crate::config::SimConfig). Distances are
//! in abstract units (one unit = one meter); the propagation speed is one
//! light-second of distance per second of delay.

/// Simulation tick rate (Hz).
pub const TICK_RATE: f64 = 60.0;

// --- Propagation ---

/// One-way delay between turret and ship, in seconds.
pub const PROPAGATION_DELAY_SECS: f64 = 1.0;

// --- Ship ---

/// Ship hit radius.
pub const SHIP_RADIUS: f64 = 20.0;

/// Thrust acceleration magnitude (units/s²).
pub const SHIP_ACCELERATION: f64 = 100.0;

/// Thrust vector turn rate (degrees per second).
pub const SHIP_ROTATION_SPEED_DEG: f64 = 45.0;

/// Initial ship velocity (units/s) along +x.
pub const SHIP_START_SPEED: f64 = 100.0;

// --- Turret ---

/// Projectile speed as a fraction of the propagation speed.
pub const PROJECTILE_SPEED_FRACTION: f64 = 1.0;

/// Seconds between volleys.
pub const SHOT_DELAY_SECS: f64 = 0.5;

/// Shots per volley.
pub const VOLLEY_SIZE: u32 = 4;

/// Maximum aim scatter per light-second of delay.
pub const MAX_SCATTER_DISTANCE: f64 = 25.0;

/// Projectile display radius.
pub const PROJECTILE_RADIUS: f64 = 20.0;

// --- Optional ship systems ---

/// Velocity integration multiplier while boosting.
pub const BOOST_MULTIPLIER: f64 = 2.0;

/// Boost tank capacity. Zero disables boost.
pub const BOOST_FUEL_CAP: f64 = 0.0;

/// Fuel regained per tick while not boosting.
pub const BOOST_REGEN_PER_TICK: f64 = 0.5;

/// Fuel spent per boosted tick.
pub const BOOST_COST_PER_TICK: f64 = 1.0;

/// Health removed per hit when health is modeled.
pub const PROJECTILE_DAMAGE: f64 = 10.0;

// --- Engine ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Upper bound on any derived tick interval (delay, shot spacing, flight time).
/// Roughly two years at 60 Hz.
pub const MAX_SCHEDULE_TICKS: u64 = u32::MAX as u64;
