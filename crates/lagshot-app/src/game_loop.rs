//! Game loop thread — steps the engine at the configured tick rate.
//!
//! The engine is moved into this thread. Commands arrive via `mpsc` channel.
//! Snapshots are stored in shared state for polling by the main thread.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::error;

use lagshot_core::commands::ShipInput;
use lagshot_core::enums::GamePhase;
use lagshot_core::error::SimError;
use lagshot_sim::SimulationEngine;

use crate::state::{GameLoopCommand, LatestSnapshot};

/// Wall-clock duration of one tick.
pub fn tick_duration(ticks_per_second: f64) -> Duration {
    Duration::from_secs_f64(1.0 / ticks_per_second)
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the loop's exit status.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: LatestSnapshot,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<Result<(), SimError>>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("lagshot-game-loop".into())
        .spawn(move || {
            let result = run_game_loop(engine, cmd_rx, &latest_snapshot);
            if let Err(e) = &result {
                error!("game loop stopped: {e}");
            }
            result
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, termination, or a
/// simulation invariant failure.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &LatestSnapshot,
) -> Result<(), SimError> {
    let tick_duration = tick_duration(engine.config().ticks_per_second);
    let mut input = ShipInput::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(new_input)) => input = new_input,
                Ok(GameLoopCommand::Shutdown) => return Ok(()),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(()),
            }
        }

        // 2. Advance one tick (engine handles phase semantics internally)
        let snapshot = engine.step(&input)?;
        let terminated = snapshot.phase == GamePhase::Terminated;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }
        if terminated {
            return Ok(());
        }

        // 4. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
