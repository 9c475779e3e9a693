use serde::{Deserialize, Serialize};

/// Summary of one `apply` call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    pub session: String,
    pub trust_weight: f64,
    /// Ids whose beliefs were fused, in processing order.
    pub updated: Vec<String>,
    /// Ids in the batch that are not tracked. Not an error.
    pub skipped: Vec<String>,
}

impl ApplyOutcome {
    pub fn updated_count(&self) -> usize {
        self.updated.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
