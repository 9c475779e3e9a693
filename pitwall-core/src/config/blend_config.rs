use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::TrackWeights;

/// Auxiliary-score blending settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Name of the blend strategy the ranker is built with.
    pub strategy: String,
    /// Share taken from the prior; the rest comes from the track signal.
    pub prior_weight: f64,
    /// Prior mean used for entities missing from the prior set.
    pub fallback_prior_mu: f64,
    pub default_track_weights: TrackWeights,
    /// Outlier filter width in median absolute deviations.
    pub outlier_n_mad: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            strategy: defaults::DEFAULT_BLEND_STRATEGY.to_string(),
            prior_weight: defaults::DEFAULT_BLEND_PRIOR_WEIGHT,
            fallback_prior_mu: defaults::DEFAULT_FALLBACK_PRIOR_MU,
            default_track_weights: TrackWeights::default(),
            outlier_n_mad: defaults::DEFAULT_OUTLIER_N_MAD,
        }
    }
}

impl BlendConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.prior_weight) {
            return Err(ConfigError::invalid(
                "blend.prior_weight",
                format!("must be within [0, 1], got {}", self.prior_weight),
            ));
        }
        if !self.fallback_prior_mu.is_finite() {
            return Err(ConfigError::invalid("blend.fallback_prior_mu", "must be finite"));
        }
        if !(self.outlier_n_mad.is_finite() && self.outlier_n_mad >= 0.0) {
            return Err(ConfigError::invalid(
                "blend.outlier_n_mad",
                format!("must be non-negative and finite, got {}", self.outlier_n_mad),
            ));
        }
        Ok(())
    }
}
