//! Kinematic integration system.
//!
//! Rotates the thrust vector, then updates velocity from acceleration and
//! position from velocity. Fixed timestep only.

use glam::DVec2;
use hecs::{Entity, World};

use lagshot_core::enums::TurnDirection;
use lagshot_core::error::SimError;
use lagshot_core::types::Kinematics;

/// Advance one body by `dt` seconds.
///
/// The thrust vector turns by `rotation_speed_deg * turn * dt` degrees and
/// keeps its magnitude. `boost_multiplier` scales only the velocity update.
pub fn integrate(
    body: &mut Kinematics,
    dt: f64,
    turn: TurnDirection,
    rotation_speed_deg: f64,
    boost_multiplier: f64,
) {
    let rotation = (rotation_speed_deg * turn.sign() * dt).to_radians();
    body.acceleration = DVec2::from_angle(rotation).rotate(body.acceleration);
    body.velocity += body.acceleration * dt * boost_multiplier;
    body.position += body.velocity * dt;
}

/// Integrate the ship for this tick.
pub fn run(
    world: &mut World,
    ship: Entity,
    dt: f64,
    turn: TurnDirection,
    rotation_speed_deg: f64,
    boost_multiplier: f64,
) -> Result<(), SimError> {
    let body = world
        .query_one_mut::<&mut Kinematics>(ship)
        .map_err(|_| SimError::MissingEntity { what: "ship" })?;
    integrate(body, dt, turn, rotation_speed_deg, boost_multiplier);
    Ok(())
}
