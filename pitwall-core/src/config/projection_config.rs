use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Prediction projector settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Normal quantile for the interval half-width (1.96 → 95%).
    pub ci_z: f64,
    /// Clamp interval bounds into `[1, scale]`. Display only, coverage is not renormalized.
    pub clamp_interval: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            ci_z: defaults::DEFAULT_CI_Z,
            clamp_interval: defaults::DEFAULT_CLAMP_INTERVAL,
        }
    }
}

impl ProjectionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.ci_z.is_finite() && self.ci_z >= 0.0) {
            return Err(ConfigError::invalid(
                "projection.ci_z",
                format!("must be non-negative and finite, got {}", self.ci_z),
            ));
        }
        Ok(())
    }
}
