use nalgebra::{Unit, UnitQuaternion, Vector3};
use serde::Serialize;

use crate::dynamics::state::{grid_count, SearchParams};
use crate::error::{ensure_positive, LaunchError, Result};
use crate::physics::gravity::UP;
use crate::physics::PhysicsParams;
use crate::sim::runner::simulate;
use super::control::{Exhaustive, SearchControl};

/// Horizontal offsets shorter than this leave the launch plane undefined.
const MIN_HORIZONTAL_OFFSET: f64 = 1e-6;

/// Outcome of a launch search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchSolution {
    pub angle: f64, // deg above horizontal
    pub speed: f64, // units/s
    pub trajectory: Vec<Vector3<f64>>,
    pub found: bool,
    /// Candidates simulated before the search stopped.
    pub evaluated: usize,
}

impl LaunchSolution {
    fn not_found(evaluated: usize) -> Self {
        Self { angle: 0.0, speed: 0.0, trajectory: Vec::new(), found: false, evaluated }
    }

    /// Turn an unsuccessful search into [`LaunchError::NoSolutionFound`].
    pub fn require(self) -> Result<Self> {
        if self.found {
            Ok(self)
        } else {
            Err(LaunchError::NoSolutionFound)
        }
    }

    /// Last trajectory sample, if any.
    pub fn impact_point(&self) -> Option<&Vector3<f64>> {
        self.trajectory.last()
    }
}

// ---------------------------------------------------------------------------
// Launch geometry
// ---------------------------------------------------------------------------

/// Unit horizontal direction from `start` toward `target`.
pub fn horizontal_direction(start: &Vector3<f64>, target: &Vector3<f64>) -> Result<Vector3<f64>> {
    let horizontal = Vector3::new(target.x - start.x, 0.0, target.z - start.z);
    if horizontal.norm() < MIN_HORIZONTAL_OFFSET {
        return Err(LaunchError::DegenerateTarget);
    }
    Ok(horizontal.normalize())
}

/// Tilt the horizontal direction `dir` upward by `angle_deg`, staying in the
/// vertical plane that contains `dir`.
pub fn launch_direction(dir: &Vector3<f64>, angle_deg: f64) -> Vector3<f64> {
    let axis = Unit::new_normalize(dir.cross(&UP));
    UnitQuaternion::from_axis_angle(&axis, angle_deg.to_radians()) * dir
}

/// Initial velocity for a candidate (angle, speed) aimed from `start` at `target`.
pub fn launch_velocity(
    start: &Vector3<f64>,
    target: &Vector3<f64>,
    angle_deg: f64,
    speed: f64,
) -> Result<Vector3<f64>> {
    let dir = horizontal_direction(start, target)?;
    Ok(launch_direction(&dir, angle_deg) * speed)
}

fn grid_values(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    (0..grid_count(min, max, step).unwrap_or(0)).map(move |i| min + i as f64 * step)
}

// ---------------------------------------------------------------------------
// Grid search
// ---------------------------------------------------------------------------

/// Search the (angle, speed) grid with a custom control.
///
/// Angles ascend in the outer loop and speeds in the inner loop; the first
/// candidate whose planning run reaches the target is returned. The search
/// holds `nominal_mass` constant for every candidate.
pub fn solve_with(
    start: &Vector3<f64>,
    target: &Vector3<f64>,
    physics: &PhysicsParams,
    nominal_mass: f64,
    search: &SearchParams,
    control: &mut dyn SearchControl,
) -> Result<LaunchSolution> {
    search.validate()?;
    physics.validate()?;
    ensure_positive("nominal_mass", nominal_mass)?;
    let dir = horizontal_direction(start, target)?;

    let mut evaluated = 0;
    for angle in grid_values(search.angle_min, search.angle_max, search.angle_step) {
        let launch_dir = launch_direction(&dir, angle);

        for speed in grid_values(search.speed_min, search.speed_max, search.speed_step) {
            if !control.proceed(angle, speed) {
                return Err(LaunchError::Cancelled { angle, speed });
            }

            let velocity = launch_dir * speed;
            let outcome = simulate(start, &velocity, target, physics, nominal_mass, search);
            evaluated += 1;

            if outcome.success {
                return Ok(LaunchSolution {
                    angle,
                    speed,
                    trajectory: outcome.points,
                    found: true,
                    evaluated,
                });
            }
        }
    }

    Ok(LaunchSolution::not_found(evaluated))
}

/// Search the full grid (convenience wrapper).
pub fn solve(
    start: &Vector3<f64>,
    target: &Vector3<f64>,
    physics: &PhysicsParams,
    nominal_mass: f64,
    search: &SearchParams,
) -> Result<LaunchSolution> {
    solve_with(start, target, physics, nominal_mass, search, &mut Exhaustive)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
