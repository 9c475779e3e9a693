use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// What to do with an observed rank outside `1..=scale`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Fuse the extrapolated rating as-is (e.g. a non-finish ranked past the field).
    #[default]
    Extrapolate,
    /// Clamp the rank into `1..=scale` before mapping it.
    Clamp,
    /// Fail the whole batch before any belief is touched.
    Reject,
}

/// Rank/rating mapping and evidence model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Scale constant `K`: rank 1 ↔ rating `K`.
    pub scale: u32,
    /// Evidence sigma at trust weight 1.0; divided by the weight per session.
    pub base_evidence_sigma: f64,
    pub out_of_range: OutOfRangePolicy,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            scale: defaults::DEFAULT_RATING_SCALE,
            base_evidence_sigma: defaults::DEFAULT_BASE_EVIDENCE_SIGMA,
            out_of_range: OutOfRangePolicy::default(),
        }
    }
}

impl RatingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::invalid("rating.scale", "scale must be at least 1"));
        }
        if !(self.base_evidence_sigma.is_finite() && self.base_evidence_sigma > 0.0) {
            return Err(ConfigError::invalid(
                "rating.base_evidence_sigma",
                format!("must be positive and finite, got {}", self.base_evidence_sigma),
            ));
        }
        Ok(())
    }
}
