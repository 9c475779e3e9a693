//! Default values for every config section.

use crate::constants;

// Rating defaults
pub const DEFAULT_RATING_SCALE: u32 = constants::RATING_SCALE;
pub const DEFAULT_BASE_EVIDENCE_SIGMA: f64 = constants::BASE_EVIDENCE_SIGMA;

// Projection defaults
pub const DEFAULT_CI_Z: f64 = constants::Z_95;
pub const DEFAULT_CLAMP_INTERVAL: bool = true;

// Blend defaults
pub const DEFAULT_BLEND_STRATEGY: &str = "zscore";
pub const DEFAULT_BLEND_PRIOR_WEIGHT: f64 = constants::BLEND_PRIOR_WEIGHT;
pub const DEFAULT_FALLBACK_PRIOR_MU: f64 = constants::FALLBACK_PRIOR_MU;
pub const DEFAULT_OUTLIER_N_MAD: f64 = constants::OUTLIER_N_MAD;

// Observability defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
