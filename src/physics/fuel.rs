use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, LaunchError, Result};

// ---------------------------------------------------------------------------
// Fuel burn: linear mass decay from wet to dry over the burn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelBurnParams {
    pub initial_mass: f64,  // kg at ignition
    pub dry_mass: f64,      // kg once fuel is exhausted
    pub burn_duration: f64, // s
}

impl FuelBurnParams {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("burn_duration", self.burn_duration)?;
        ensure_positive("initial_mass", self.initial_mass)?;
        ensure_positive("dry_mass", self.dry_mass)
    }

    /// Mass after `elapsed` seconds of burn.
    pub fn mass_at(&self, elapsed: f64) -> Result<f64> {
        mass_at(elapsed, self.initial_mass, self.dry_mass, self.burn_duration)
    }

    /// Same burn rescaled so it starts at `launch_mass`, keeping the
    /// dry-to-wet ratio and the burn duration.
    pub fn scaled_to(&self, launch_mass: f64) -> Result<Self> {
        self.validate()?;
        ensure_positive("mass", launch_mass)?;
        Ok(Self {
            initial_mass: launch_mass,
            dry_mass: self.dry_mass * (launch_mass / self.initial_mass),
            burn_duration: self.burn_duration,
        })
    }

    /// Closed interval every burn mass lies in.
    pub fn mass_bounds(&self) -> (f64, f64) {
        (self.initial_mass.min(self.dry_mass), self.initial_mass.max(self.dry_mass))
    }
}

impl Default for FuelBurnParams {
    fn default() -> Self {
        Self { initial_mass: 1.0, dry_mass: 0.5, burn_duration: 2.0 }
    }
}

/// Mass after `elapsed` seconds, interpolated linearly from `initial_mass`
/// to `dry_mass` and held at `dry_mass` once the burn is over.
pub fn mass_at(elapsed: f64, initial_mass: f64, dry_mass: f64, burn_duration: f64) -> Result<f64> {
    ensure_positive("burn_duration", burn_duration)?;
    if elapsed.is_nan() {
        return Err(LaunchError::invalid("elapsed", "must not be NaN"));
    }
    let t = (elapsed / burn_duration).clamp(0.0, 1.0);
    if t >= 1.0 {
        return Ok(dry_mass);
    }
    let (lo, hi) = (initial_mass.min(dry_mass), initial_mass.max(dry_mass));
    Ok((initial_mass + (dry_mass - initial_mass) * t).clamp(lo, hi))
}
