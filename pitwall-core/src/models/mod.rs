mod apply_outcome;
mod belief;
mod gaussian;
mod prediction;
mod prior;
mod segment;
mod session;
mod update_record;

pub use apply_outcome::ApplyOutcome;
pub use belief::Belief;
pub use gaussian::Gaussian;
pub use prediction::Prediction;
pub use prior::{EntityPrior, ExperienceClass, Tier};
pub use segment::{ScoredEntity, Segment, SegmentScores, TrackWeights};
pub use session::SessionKind;
pub use update_record::UpdateRecord;
