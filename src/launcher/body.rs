use nalgebra::Vector3;

use crate::dynamics::state::BodyState;
use crate::physics::gravity_accel;

/// Rigid-body engine the launcher drives.
///
/// The engine owns position and velocity, applies gravity natively and
/// integrates forces added during a step.
pub trait RigidBody {
    fn position(&self) -> Vector3<f64>;
    fn velocity(&self) -> Vector3<f64>;
    fn set_velocity(&mut self, vel: Vector3<f64>);
    /// Continuous force, applied over the next step.
    fn add_force(&mut self, force: Vector3<f64>);
    fn set_mass(&mut self, mass: f64);
    /// Teleport to `pos` and come to rest.
    fn reset_to(&mut self, pos: Vector3<f64>);
}

// ---------------------------------------------------------------------------
// Point-mass stand-in for a host engine
// ---------------------------------------------------------------------------

/// Minimal [`RigidBody`]: gravity plus accumulated forces, semi-implicit Euler.
#[derive(Debug, Clone)]
pub struct PointMassBody {
    pub state: BodyState,
    pub mass: f64,
    pub gravity: f64,
    pending_force: Vector3<f64>,
}

impl PointMassBody {
    pub fn new(pos: Vector3<f64>, mass: f64, gravity: f64) -> Self {
        Self { state: BodyState::at_rest(pos), mass, gravity, pending_force: Vector3::zeros() }
    }

    /// Integrate one physics step and clear the accumulated force.
    pub fn step(&mut self, dt: f64) {
        let accel = gravity_accel(self.gravity) + self.pending_force / self.mass;
        self.state.vel += accel * dt;
        self.state.pos += self.state.vel * dt;
        self.state.time += dt;
        self.pending_force = Vector3::zeros();
    }

    pub fn on_ground(&self) -> bool {
        self.state.pos.y < 0.0
    }
}

impl RigidBody for PointMassBody {
    fn position(&self) -> Vector3<f64> {
        self.state.pos
    }

    fn velocity(&self) -> Vector3<f64> {
        self.state.vel
    }

    fn set_velocity(&mut self, vel: Vector3<f64>) {
        self.state.vel = vel;
    }

    fn add_force(&mut self, force: Vector3<f64>) {
        self.pending_force += force;
    }

    fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    fn reset_to(&mut self, pos: Vector3<f64>) {
        self.state = BodyState::at_rest(pos);
        self.pending_force = Vector3::zeros();
    }
}
