//! Text HUD lines built from snapshots.

use lagshot_core::state::GameStateSnapshot;

/// One status line: time, speed, shots, hits and accuracy.
pub fn status_line(snapshot: &GameStateSnapshot) -> String {
    let mut line = format!(
        "Simulation time: {:.0} s | Speed: {:.0} p/s | Shots made: {} | Shots hit: {} ({:.1}%)",
        snapshot.time.elapsed_secs,
        snapshot.ship.speed,
        snapshot.stats.shots_fired,
        snapshot.stats.shots_hit,
        snapshot.stats.accuracy_pct,
    );
    if let (Some(health), Some(max)) = (snapshot.ship.health, snapshot.ship.max_health) {
        line.push_str(&format!(" | Health: {:.0}/{:.0}", health.max(0.0), max));
    }
    if snapshot.ship.boost_fuel_cap > 0.0 {
        line.push_str(&format!(
            " | Boost: {:.0}/{:.0}",
            snapshot.ship.boost_fuel, snapshot.ship.boost_fuel_cap
        ));
    }
    line
}

/// Final summary once the engagement ends.
pub fn outcome_line(snapshot: &GameStateSnapshot) -> String {
    let destroyed = snapshot.ship.health.is_some_and(|h| h <= 0.0);
    let verdict = if destroyed {
        "Ship destroyed"
    } else {
        "Ship survived"
    };
    format!(
        "{verdict} after {:.1} s: {} of {} shots hit, mean offset {:.1}",
        snapshot.time.elapsed_secs,
        snapshot.stats.shots_hit,
        snapshot.stats.shots_fired,
        snapshot.stats.mean_hit_offset,
    )
}
