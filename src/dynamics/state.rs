use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, LaunchError, Result};
use crate::physics::FuelBurnParams;

// ---------------------------------------------------------------------------
// Point-mass kinematic state (used by the planning integrator)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub time: f64,         // s since launch
    pub pos: Vector3<f64>, // world units, y up
    pub vel: Vector3<f64>, // units/s
}

impl BodyState {
    pub fn at_rest(pos: Vector3<f64>) -> Self {
        Self { time: 0.0, pos, vel: Vector3::zeros() }
    }

    pub fn launched(pos: Vector3<f64>, vel: Vector3<f64>) -> Self {
        Self { time: 0.0, pos, vel }
    }
}

// ---------------------------------------------------------------------------
// Live flight bookkeeping (mutated once per physics tick)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub elapsed_burn_time: f64, // s, never negative
    pub current_mass: f64,      // kg
    pub launched: bool,
}

impl FlightState {
    /// Pre-launch state: full tank, burn clock at zero.
    pub fn new(fuel: &FuelBurnParams) -> Self {
        Self { elapsed_burn_time: 0.0, current_mass: fuel.initial_mass, launched: false }
    }

    /// State at the moment of launch.
    pub fn launch(fuel: &FuelBurnParams) -> Self {
        Self { launched: true, ..Self::new(fuel) }
    }

    pub fn reset(&mut self, fuel: &FuelBurnParams) {
        *self = Self::new(fuel);
    }

    pub fn burning(&self, fuel: &FuelBurnParams) -> bool {
        self.launched && self.elapsed_burn_time < fuel.burn_duration
    }
}

// ---------------------------------------------------------------------------
// Search grid and integrator resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub angle_min: f64, // deg above horizontal
    pub angle_max: f64,
    pub speed_min: f64, // units/s
    pub speed_max: f64,
    pub angle_step: f64,
    pub speed_step: f64,
    pub time_step: f64,           // s, integrator step
    pub acceptable_distance: f64, // hit radius around the target
    pub max_steps: usize,
}

impl SearchParams {
    /// Checks shared by the integrator and the solver.
    pub fn validate_integration(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(LaunchError::invalid("max_steps", "must be at least 1"));
        }
        ensure_positive("time_step", self.time_step)?;
        ensure_positive("acceptable_distance", self.acceptable_distance)
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_integration()?;
        ensure_positive("angle_step", self.angle_step)?;
        ensure_positive("speed_step", self.speed_step)?;
        check_range("angle", self.angle_min, self.angle_max)?;
        check_range("speed", self.speed_min, self.speed_max)?;
        if grid_count(self.angle_min, self.angle_max, self.angle_step).is_none() {
            return Err(LaunchError::invalid("angle", "grid too large"));
        }
        if grid_count(self.speed_min, self.speed_max, self.speed_step).is_none() {
            return Err(LaunchError::invalid("speed", "grid too large"));
        }
        if self.grid_size().is_none() {
            return Err(LaunchError::invalid("grid", "angle x speed candidate count overflows"));
        }
        Ok(())
    }

    /// Number of (angle, speed) candidates in the grid, `None` if it does
    /// not fit in a `usize`.
    pub fn grid_size(&self) -> Option<usize> {
        grid_count(self.angle_min, self.angle_max, self.angle_step)?
            .checked_mul(grid_count(self.speed_min, self.speed_max, self.speed_step)?)
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            angle_min: 20.0,
            angle_max: 80.0,
            speed_min: 5.0,
            speed_max: 1000.0,
            angle_step: 1.0,
            speed_step: 1.0,
            time_step: 0.02, // 50 Hz
            acceptable_distance: 1.0,
            max_steps: 1000,
        }
    }
}

fn check_range(field: &'static str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(LaunchError::invalid(field, format!("range must be finite, got [{min}, {max}]")));
    }
    if min > max {
        return Err(LaunchError::invalid(field, format!("range is inverted: min {min} > max {max}")));
    }
    Ok(())
}

/// Grid points `min + i * step` that do not exceed `max`.
///
/// A small slack absorbs rounding so that e.g. `[0.1, 0.3]` step `0.1`
/// keeps its last point. Returns `None` when the count overflows `usize`.
pub(crate) fn grid_count(min: f64, max: f64, step: f64) -> Option<usize> {
    if step.is_nan() || step <= 0.0 || min > max {
        return Some(0);
    }
    let intervals = ((max - min) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= usize::MAX as f64 {
        return None;
    }
    (intervals as usize).checked_add(1)
}
