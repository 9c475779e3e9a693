//! Blend strategies.
//!
//! Every strategy reports "higher is better" so the ranker can sort all of
//! them the same way.

pub mod prior_only;
pub mod weighted_sum;
pub mod zscore;

pub use prior_only::PriorOnlyBlend;
pub use weighted_sum::WeightedSumBlend;
pub use zscore::ZScoreBlend;

use pitwall_core::config::BlendConfig;
use pitwall_core::errors::ConfigError;
use pitwall_core::traits::RatingCombiner;

/// Strategy names accepted by [`combiner_for`].
pub const STRATEGY_NAMES: [&str; 3] = [
    WeightedSumBlend::NAME,
    ZScoreBlend::NAME,
    PriorOnlyBlend::NAME,
];

/// Build the named strategy using `config.prior_weight`.
pub fn combiner_for(name: &str, config: &BlendConfig) -> Result<Box<dyn RatingCombiner>, ConfigError> {
    match name {
        WeightedSumBlend::NAME => Ok(Box::new(WeightedSumBlend::new(config.prior_weight))),
        ZScoreBlend::NAME => Ok(Box::new(ZScoreBlend::new(config.prior_weight))),
        PriorOnlyBlend::NAME => Ok(Box::new(PriorOnlyBlend)),
        other => Err(ConfigError::invalid(
            "blend.strategy",
            format!("unknown strategy '{other}', expected one of {STRATEGY_NAMES:?}"),
        )),
    }
}
