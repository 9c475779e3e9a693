use pitwall_core::constants::BLEND_PRIOR_WEIGHT;
use pitwall_core::models::{ScoredEntity, Segment, SegmentScores, TrackWeights};
use pitwall_core::traits::RatingCombiner;

use crate::stats;

/// Blend on z-normalized segment scores.
///
/// Segment scores are time deltas, so a lower normalized signal is better:
/// `rating = w * mu - (1 - w) * signal`.
#[derive(Debug, Clone, Copy)]
pub struct ZScoreBlend {
    prior_weight: f64,
}

impl ZScoreBlend {
    pub const NAME: &'static str = "zscore";

    pub fn new(prior_weight: f64) -> Self {
        Self { prior_weight }
    }

    pub fn prior_weight(&self) -> f64 {
        self.prior_weight
    }
}

impl Default for ZScoreBlend {
    fn default() -> Self {
        Self::new(BLEND_PRIOR_WEIGHT)
    }
}

impl RatingCombiner for ZScoreBlend {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Replace each present segment score with its z-score across the field.
    ///
    /// Missing scores stay missing and are left out of the mean and std.
    /// When a segment has fewer than two scores or zero spread, every
    /// present score becomes 0.
    fn prepare(&self, field: &[ScoredEntity]) -> Vec<ScoredEntity> {
        let mut out = field.to_vec();
        for segment in Segment::ALL {
            let values: Vec<f64> = field.iter().filter_map(|e| e.scores.get(segment)).collect();
            let mean = stats::mean(&values).unwrap_or(0.0);
            let spread = stats::sample_std(&values).filter(|s| *s > 0.0);

            for entity in &mut out {
                if let Some(value) = entity.scores.get(segment) {
                    let z = spread.map_or(0.0, |s| (value - mean) / s);
                    entity.scores.set(segment, Some(z));
                }
            }
        }
        out
    }

    fn combine(&self, prior_mu: f64, scores: &SegmentScores, weights: &TrackWeights) -> f64 {
        self.prior_weight * prior_mu - (1.0 - self.prior_weight) * weights.signal(scores)
    }
}
