//! # pitwall-blend
//!
//! Ranks a field by blending each entity's prior rating with track-weighted
//! auxiliary segment scores. The blend formula is a [`RatingCombiner`]
//! strategy; [`BlendRanker`] only sees the trait.
//!
//! [`RatingCombiner`]: pitwall_core::traits::RatingCombiner

pub mod outliers;
pub mod ranker;
pub mod stats;
pub mod strategies;

pub use outliers::{remove_outliers_mad, OutlierReport};
pub use ranker::{prior_means, BlendRanker, BlendedPrediction};
pub use strategies::{combiner_for, PriorOnlyBlend, WeightedSumBlend, ZScoreBlend};
