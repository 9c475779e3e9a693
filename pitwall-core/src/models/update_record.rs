use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Gaussian;

/// One audit entry: a single entity fused with one observed rank.
///
/// Records are append-only and ordered by `sequence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Position in the audit trail, starting at 0.
    pub sequence: u64,
    /// Free-text session label supplied by the caller.
    pub session: String,
    pub entity_id: String,
    pub display_code: String,
    /// Rank as observed, before any out-of-range policy was applied.
    pub observed_rank: u32,
    /// Evidence rating actually fused.
    pub observed_rating: f64,
    pub evidence_sigma: f64,
    pub prior: Gaussian,
    pub posterior: Gaussian,
    pub trust_weight: f64,
    pub recorded_at: DateTime<Utc>,
}

impl UpdateRecord {
    /// Signed change of the mean caused by this update.
    pub fn mu_shift(&self) -> f64 {
        self.posterior.mu - self.prior.mu
    }
}
