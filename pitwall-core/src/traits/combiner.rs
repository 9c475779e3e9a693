use crate::models::{ScoredEntity, SegmentScores, TrackWeights};

/// Blends a prior rating with auxiliary segment scores into one rating.
///
/// Strategies are interchangeable; the ranking pipeline only sees this trait.
pub trait RatingCombiner: Send + Sync {
    /// Strategy name for logs and reports.
    fn name(&self) -> &'static str;

    /// Field-level preprocessing run once before `combine` (e.g. normalization).
    fn prepare(&self, field: &[ScoredEntity]) -> Vec<ScoredEntity> {
        field.to_vec()
    }

    /// Combined rating for one entity. Higher is better.
    fn combine(&self, prior_mu: f64, scores: &SegmentScores, weights: &TrackWeights) -> f64;
}
