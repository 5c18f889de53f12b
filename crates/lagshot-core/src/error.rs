//! Error type shared by configuration and the simulation engine.
//!
//! The core performs no I/O, so every variant here is either a rejected
//! configuration or a broken simulation invariant. None are retried.

/// Errors surfaced by the engagement simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A configuration parameter is out of its valid range.
    InvalidConfig { field: &'static str, reason: String },
    /// A delayed lookup asked for more history than has been recorded.
    HistoryUnderrun { requested: u64, available: usize },
    /// A live projectile's arrival tick passed without resolution.
    UnresolvedProjectile {
        shot_id: u32,
        arrival_tick: u64,
        current_tick: u64,
    },
    /// A projectile that already left the live state was resolved again.
    DoubleResolution { shot_id: u32 },
    /// An entity the engine relies on is missing from the world.
    MissingEntity { what: &'static str },
}

impl SimError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "Invalid configuration for {field}: {reason}")
            }
            Self::HistoryUnderrun {
                requested,
                available,
            } => {
                write!(
                    f,
                    "History underrun: requested {requested} ticks back with only {available} entries recorded"
                )
            }
            Self::UnresolvedProjectile {
                shot_id,
                arrival_tick,
                current_tick,
            } => {
                write!(
                    f,
                    "Projectile {shot_id} was due at tick {arrival_tick} but is still live at tick {current_tick}"
                )
            }
            Self::DoubleResolution { shot_id } => {
                write!(f, "Projectile {shot_id} resolved more than once")
            }
            Self::MissingEntity { what } => write!(f, "Missing {what} entity in world"),
        }
    }
}

impl std::error::Error for SimError {}
