use crate::models::{ApplyOutcome, UpdateRecord};

/// Hook notified by the update engine.
///
/// All methods have no-op defaults, so observers only override the events
/// they care about. Called synchronously while the store is being mutated:
/// implementations must not call back into the engine.
pub trait UpdateObserver: Send + Sync {
    /// A belief was fused; `record` is the audit entry just appended.
    fn on_belief_updated(&self, _record: &UpdateRecord) {}

    /// An id in the batch is not tracked and was skipped.
    fn on_entity_skipped(&self, _session: &str, _entity_id: &str) {}

    /// A whole batch finished.
    fn on_session_applied(&self, _outcome: &ApplyOutcome) {}
}

/// Observer that ignores every event.
pub struct NoOpObserver;

impl UpdateObserver for NoOpObserver {}
