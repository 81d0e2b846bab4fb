//! Launcher configuration, loadable from TOML.
//!
//! Every field has a default, so a file only needs the values it overrides:
//!
//! ```toml
//! nominal_mass = 2.0
//!
//! [search]
//! speed_max = 300.0
//! acceptable_distance = 0.5
//! ```

use std::path::Path;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dynamics::state::SearchParams;
use crate::error::{ensure_positive, LaunchError};
use crate::physics::{FuelBurnParams, PhysicsParams};

/// Everything one launcher needs besides the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Pad position; the rocket starts here and returns here on reset.
    pub home: Vector3<f64>,
    /// Mass assumed by the search when the launch request gives none.
    pub nominal_mass: f64,
    pub physics: PhysicsParams,
    pub search: SearchParams,
    pub fuel: FuelBurnParams,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            home: Vector3::zeros(),
            nominal_mass: 1.0,
            physics: PhysicsParams::default(),
            search: SearchParams::default(),
            fuel: FuelBurnParams::default(),
        }
    }
}

/// Errors that can occur while loading a launcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to render TOML: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("config rejected: {0}")]
    Invalid(#[from] LaunchError),
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<(), LaunchError> {
        ensure_positive("nominal_mass", self.nominal_mass)?;
        self.physics.validate()?;
        self.search.validate()?;
        self.fuel.validate()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: LauncherConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
