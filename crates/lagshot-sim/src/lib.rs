//! Simulation engine for LAGSHOT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for presentation.

pub mod engine;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use lagshot_core as core;
