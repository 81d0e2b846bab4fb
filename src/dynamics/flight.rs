use nalgebra::Vector3;

use crate::dynamics::state::FlightState;
use crate::error::Result;
use crate::physics::{FuelBurnParams, PhysicsParams};

/// Below this speed the body counts as stopped and gets no drag correction.
pub const STOPPED_SPEED: f64 = 0.01;

/// Output of one post-launch physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightTick {
    pub mass: f64,
    /// Drag correction for the rigid-body engine. Gravity is not included;
    /// the engine applies it natively.
    pub force: Vector3<f64>,
}

/// Advance the burn clock by `dt`, update the mass and compute the drag force
/// for the velocity the rigid-body engine reports.
///
/// Ticking a state that has not launched is a no-op. A launched state is
/// checked against `fuel` before the clock moves.
pub fn tick(
    state: &mut FlightState,
    current_velocity: &Vector3<f64>,
    dt: f64,
    physics: &PhysicsParams,
    fuel: &FuelBurnParams,
) -> Result<FlightTick> {
    if !state.launched {
        return Ok(FlightTick { mass: state.current_mass, force: Vector3::zeros() });
    }
    fuel.validate()?;

    if state.elapsed_burn_time < fuel.burn_duration {
        state.elapsed_burn_time += dt.max(0.0);
        state.current_mass = fuel.mass_at(state.elapsed_burn_time)?;
    } else {
        state.current_mass = fuel.dry_mass;
    }

    let force = if current_velocity.norm() <= STOPPED_SPEED {
        Vector3::zeros()
    } else {
        physics.drag(current_velocity)
    };

    Ok(FlightTick { mass: state.current_mass, force })
}
