//! Snapping configuration.

use crate::bounds::DEFAULT_GUIDE_EPSILON;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default snap distance in canvas units.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid tolerance: {0} (must be finite and non-negative)")]
    InvalidTolerance(f64),
    #[error("Invalid guide epsilon: {0} (must be finite and positive)")]
    InvalidEpsilon(f64),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Thresholds used by a [`Detector`](crate::Detector).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Maximum distance at which an edge or center snaps to a candidate line.
    pub tolerance: f64,
    /// Half-width of the window in which a candidate counts as coincident
    /// with one of the moving box's lines when building guides.
    pub guide_epsilon: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            guide_epsilon: DEFAULT_GUIDE_EPSILON,
        }
    }
}

impl SnapConfig {
    /// Create a config with the given tolerance and the default epsilon.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Check that both thresholds are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if !self.guide_epsilon.is_finite() || self.guide_epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.guide_epsilon));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
