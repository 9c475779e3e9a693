/// Pitwall version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rating scale `K`: rank 1 maps to rating `K`, rank `K` maps to rating 1.
pub const RATING_SCALE: u32 = 20;

/// Evidence standard deviation for a full-trust session (trust weight 1.0).
pub const BASE_EVIDENCE_SIGMA: f64 = 5.0;

/// Two-sided 95% quantile of the standard normal.
pub const Z_95: f64 = 1.96;

/// Share of a blended rating taken from the prior belief.
pub const BLEND_PRIOR_WEIGHT: f64 = 0.9;

/// Prior mean assumed for entities that have no prior during blending.
pub const FALLBACK_PRIOR_MU: f64 = 10.0;

/// Default number of median absolute deviations tolerated by the outlier filter.
pub const OUTLIER_N_MAD: f64 = 3.0;
