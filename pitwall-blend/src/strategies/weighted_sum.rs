use pitwall_core::constants::BLEND_PRIOR_WEIGHT;
use pitwall_core::models::{SegmentScores, TrackWeights};
use pitwall_core::traits::RatingCombiner;

/// Linear blend of the prior mean and the raw track signal.
///
/// `rating = w * mu + (1 - w) * signal`, scores taken as-is.
#[derive(Debug, Clone, Copy)]
pub struct WeightedSumBlend {
    prior_weight: f64,
}

impl WeightedSumBlend {
    pub const NAME: &'static str = "weighted_sum";

    pub fn new(prior_weight: f64) -> Self {
        Self { prior_weight }
    }

    pub fn prior_weight(&self) -> f64 {
        self.prior_weight
    }
}

impl Default for WeightedSumBlend {
    fn default() -> Self {
        Self::new(BLEND_PRIOR_WEIGHT)
    }
}

impl RatingCombiner for WeightedSumBlend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn combine(&self, prior_mu: f64, scores: &SegmentScores, weights: &TrackWeights) -> f64 {
        self.prior_weight * prior_mu + (1.0 - self.prior_weight) * weights.signal(scores)
    }
}
