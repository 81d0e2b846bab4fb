use nalgebra::Vector3;

use crate::dynamics::state::BodyState;

// ---------------------------------------------------------------------------
// Terminal events for a planning run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Sample landed inside the hit radius around the target.
    TargetReached,
    /// Sample dropped below the ground plane `y = 0`.
    GroundImpact,
}

/// Trait for passive event detectors.
/// Implementations inspect each new sample and report terminal events.
pub trait EventDetector {
    fn check(&mut self, current: &BodyState) -> Option<EventKind>;
}

/// Fires when a sample is strictly closer than `radius` to `target`.
pub struct TargetProximity {
    pub target: Vector3<f64>,
    pub radius: f64,
}

impl EventDetector for TargetProximity {
    fn check(&mut self, current: &BodyState) -> Option<EventKind> {
        if (current.pos - self.target).norm() < self.radius {
            Some(EventKind::TargetReached)
        } else {
            None
        }
    }
}

/// Fires when altitude goes negative.
pub struct GroundCrossing;

impl EventDetector for GroundCrossing {
    fn check(&mut self, current: &BodyState) -> Option<EventKind> {
        if current.pos.y < 0.0 {
            Some(EventKind::GroundImpact)
        } else {
            None
        }
    }
}
