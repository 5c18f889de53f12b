//! Steering system: picks this tick's turn direction and boost.
//!
//! Autopilot re-rolls a random turn once per propagation delay, so every
//! maneuver is already stale by the time the turret can see it. Manual
//! steering takes the per-tick input and may spend boost fuel.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use lagshot_core::commands::ShipInput;
use lagshot_core::components::{BoostFuel, Helm};
use lagshot_core::config::SimConfig;
use lagshot_core::enums::{SteeringMode, TurnDirection};
use lagshot_core::error::SimError;
use lagshot_core::events::SimEvent;

/// Inputs for this tick's integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringDecision {
    pub turn: TurnDirection,
    pub boost_multiplier: f64,
}

/// Decide the ship's turn and boost for `current_tick`.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    ship: Entity,
    mode: SteeringMode,
    input: &ShipInput,
    config: &SimConfig,
    current_tick: u64,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SimEvent>,
) -> Result<SteeringDecision, SimError> {
    let (helm, fuel) = world
        .query_one_mut::<(&mut Helm, &mut BoostFuel)>(ship)
        .map_err(|_| SimError::MissingEntity { what: "ship" })?;

    let boost_requested = match mode {
        SteeringMode::Autopilot => {
            if current_tick >= helm.next_course_change {
                helm.turn = random_turn(rng);
                helm.next_course_change =
                    current_tick.saturating_add(config.autopilot_interval_ticks());
                events.push(SimEvent::CourseChange { turn: helm.turn });
            }
            false
        }
        SteeringMode::Manual => {
            helm.turn = input.turn;
            input.boost
        }
    };

    helm.boosting = burn_boost(fuel, boost_requested, config);
    let boost_multiplier = if helm.boosting {
        config.boost_multiplier
    } else {
        1.0
    };

    Ok(SteeringDecision {
        turn: helm.turn,
        boost_multiplier,
    })
}

/// Evasive turn: clockwise or counter-clockwise with equal odds.
pub fn random_turn(rng: &mut ChaCha8Rng) -> TurnDirection {
    if rng.gen_bool(0.5) {
        TurnDirection::Clockwise
    } else {
        TurnDirection::CounterClockwise
    }
}

/// Spend fuel for a boosted tick if possible, otherwise regenerate.
/// Returns whether boost is applied.
pub fn burn_boost(fuel: &mut BoostFuel, requested: bool, config: &SimConfig) -> bool {
    if requested && fuel.cap > 0.0 && fuel.fuel >= config.boost_cost_per_tick {
        fuel.fuel -= config.boost_cost_per_tick;
        true
    } else {
        fuel.fuel = (fuel.fuel + config.boost_regen_per_tick).min(fuel.cap);
        false
    }
}
