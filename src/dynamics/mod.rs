pub mod flight;
pub mod state;

use nalgebra::Vector3;

use crate::physics::{gravity_force, PhysicsParams};
use state::BodyState;

pub use flight::{tick, FlightTick, STOPPED_SPEED};
pub use state::{FlightState, SearchParams};

// ---------------------------------------------------------------------------
// Equations of motion (3DOF point mass, constant mass over the call)
// ---------------------------------------------------------------------------

/// Acceleration of a body of `mass` in the given environment.
///
/// Forces modeled:
///   1. Gravity, uniform along -y
///   2. Drag, quadratic, opposing velocity
pub fn acceleration(state: &BodyState, physics: &PhysicsParams, mass: f64) -> Vector3<f64> {
    let f_gravity = gravity_force(physics.gravity, mass);
    let f_drag = physics.drag(&state.vel);
    (f_gravity + f_drag) / mass
}
