use thiserror::Error;

/// Errors reported by the launch solver, the fuel model and the launcher.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaunchError {
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
    #[error("target has no horizontal offset from the launch point; launch direction is undefined")]
    DegenerateTarget,
    #[error("no launch angle/speed in the search grid reaches the target")]
    NoSolutionFound,
    #[error("launch search cancelled at angle {angle:.1} deg, speed {speed:.1}")]
    Cancelled { angle: f64, speed: f64 },
    #[error("rocket is already in flight; reset before launching again")]
    AlreadyLaunched,
}

impl LaunchError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        LaunchError::InvalidConfiguration { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;

/// Require `value` to be finite and strictly positive.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LaunchError::invalid(field, format!("must be positive, got {value}")))
    }
}
