use pitwall_core::models::{SegmentScores, TrackWeights};
use pitwall_core::traits::RatingCombiner;

/// Baseline that ignores auxiliary scores and ranks by prior mean alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorOnlyBlend;

impl PriorOnlyBlend {
    pub const NAME: &'static str = "prior_only";
}

impl RatingCombiner for PriorOnlyBlend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn combine(&self, prior_mu: f64, _scores: &SegmentScores, _weights: &TrackWeights) -> f64 {
        prior_mu
    }
}
