//! State shared between the runner's main thread and the game loop thread.

use std::sync::{Arc, Mutex};

use lagshot_core::commands::{PlayerCommand, ShipInput};
use lagshot_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Ship input to apply on every tick until replaced.
    Input(ShipInput),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
pub type LatestSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_latest_snapshot() -> LatestSnapshot {
    Arc::new(Mutex::new(None))
}
