use serde::{Deserialize, Serialize};

use super::Gaussian;

/// One projected row: expected rank with a 95% interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub entity_id: String,
    pub display_code: String,
    pub group: String,
    /// Belief the row was projected from.
    pub rating: Gaussian,
    /// Continuous expected rank, `(K + 1) - mu`. Lower is better.
    pub predicted_rank_value: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    /// Dense 1-based position after sorting by `predicted_rank_value`.
    pub predicted_rank: usize,
    pub n_observations: u32,
}
