use crate::dynamics::{self, state::BodyState};
use crate::physics::PhysicsParams;

// ---------------------------------------------------------------------------
// Fixed-step semi-implicit Euler
// ---------------------------------------------------------------------------

/// Single Euler step: velocity first, then position with the new velocity.
pub fn euler_step(state: &BodyState, physics: &PhysicsParams, mass: f64, dt: f64) -> BodyState {
    let accel = dynamics::acceleration(state, physics, mass);
    let vel = state.vel + accel * dt;
    BodyState {
        time: state.time + dt,
        pos: state.pos + vel * dt,
        vel,
    }
}
