//! Configuration errors.
//!
//! The gesture core itself is total: every touch batch produces a transform.
//! Only host-supplied configuration can be rejected.

/// A zoom configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid zoom config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scale limits: min {min} must be positive and not exceed max {max}")]
    InvalidLimits { min: f64, max: f64 },
}

impl ConfigError {
    /// Stable code for hosts that branch on the failure kind.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Json(_) => "E_CONFIG_JSON",
            Self::InvalidLimits { .. } => "E_INVALID_LIMITS",
        }
    }
}
