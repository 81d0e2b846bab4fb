use nalgebra::Vector3;

use crate::dynamics::state::{BodyState, SearchParams};
use crate::error::{ensure_positive, Result};
use crate::physics::PhysicsParams;
use super::event::{EventDetector, EventKind, GroundCrossing, TargetProximity};
use super::integrator::euler_step;

/// Result of one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimOutcome {
    pub success: bool,
    /// Terminal event, or `None` when `max_steps` ran out first.
    pub event: Option<EventKind>,
    /// Sampled positions; `points[0]` is the start position.
    pub points: Vec<Vector3<f64>>,
}

// ---------------------------------------------------------------------------
// Planning simulation
// ---------------------------------------------------------------------------

/// Integrate one candidate launch toward `target` with constant `mass`.
///
/// Stops at the first sample inside the hit radius (success), the first
/// sample below ground, or after `max_steps` samples. Fuel burn is not
/// modeled here; the live flight applies it separately.
pub fn simulate(
    start: &Vector3<f64>,
    initial_velocity: &Vector3<f64>,
    target: &Vector3<f64>,
    physics: &PhysicsParams,
    mass: f64,
    search: &SearchParams,
) -> SimOutcome {
    let mut state = BodyState::launched(*start, *initial_velocity);
    let mut hit = TargetProximity { target: *target, radius: search.acceptable_distance };
    let mut ground = GroundCrossing;

    let mut points = Vec::with_capacity(search.max_steps.saturating_add(1).min(100_000));
    points.push(state.pos);

    for _ in 0..search.max_steps {
        state = euler_step(&state, physics, mass, search.time_step);
        points.push(state.pos);

        if let Some(event) = hit.check(&state).or_else(|| ground.check(&state)) {
            return SimOutcome {
                success: event == EventKind::TargetReached,
                event: Some(event),
                points,
            };
        }
    }

    SimOutcome { success: false, event: None, points }
}

/// [`simulate`] with the inputs checked first.
pub fn try_simulate(
    start: &Vector3<f64>,
    initial_velocity: &Vector3<f64>,
    target: &Vector3<f64>,
    physics: &PhysicsParams,
    mass: f64,
    search: &SearchParams,
) -> Result<SimOutcome> {
    search.validate_integration()?;
    physics.validate()?;
    ensure_positive("mass", mass)?;
    Ok(simulate(start, initial_velocity, target, physics, mass, search))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
