pub mod aerodynamics;
pub mod fuel;
pub mod gravity;

use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, Result};

pub use aerodynamics::drag_force;
pub use fuel::{mass_at, FuelBurnParams};
pub use gravity::{gravity_accel, gravity_force};

// ---------------------------------------------------------------------------
// Environment constants shared by the search and the live flight
// ---------------------------------------------------------------------------

/// Aerodynamic and gravitational constants for one solve or flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub drag_coefficient: f64,     // dimensionless
    pub cross_sectional_area: f64, // m^2
    pub air_density: f64,          // kg/m^3
    pub gravity: f64,              // m/s^2, acts along -y
}

impl PhysicsParams {
    /// Same environment with drag switched off.
    pub fn vacuum(gravity: f64) -> Self {
        Self { drag_coefficient: 0.0, gravity, ..Self::default() }
    }

    /// Drag force on a body moving at `vel` through this environment.
    pub fn drag(&self, vel: &nalgebra::Vector3<f64>) -> nalgebra::Vector3<f64> {
        drag_force(vel, self.air_density, self.drag_coefficient, self.cross_sectional_area)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("drag_coefficient", self.drag_coefficient),
            ("cross_sectional_area", self.cross_sectional_area),
            ("air_density", self.air_density),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LaunchError::invalid(field, format!("must be non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            drag_coefficient: 0.5,
            cross_sectional_area: 0.01,
            air_density: 1.225, // sea level
            gravity: 9.81,
        }
    }
}
