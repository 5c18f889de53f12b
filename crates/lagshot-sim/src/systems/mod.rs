//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state — all state lives in components. The engine runs
//! them in a fixed order: history, steering, fire control, kinematics,
//! collision.

pub mod collision;
pub mod fire_control;
pub mod history;
pub mod kinematics;
pub mod snapshot;
pub mod steering;
