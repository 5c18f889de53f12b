//! LAGSHOT headless runner.
//!
//! Wires the simulation engine to a fixed-rate game loop thread and a text
//! HUD. Rendering and keyboard input live outside this crate.

pub mod game_loop;
pub mod hud;
pub mod state;

pub use lagshot_core as core;
