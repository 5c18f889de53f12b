//! History logging system: snapshots the ship before anything moves it.

use hecs::{Entity, World};

use lagshot_core::error::SimError;
use lagshot_core::history::HistoryLog;
use lagshot_core::types::Kinematics;

/// Append the ship's current kinematic state to its history log.
pub fn run(world: &mut World, ship: Entity) -> Result<(), SimError> {
    let (state, log) = world
        .query_one_mut::<(&Kinematics, &mut HistoryLog)>(ship)
        .map_err(|_| SimError::MissingEntity { what: "ship" })?;
    log.record(state);
    Ok(())
}
