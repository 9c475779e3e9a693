//! Span definitions per operation: session update, projection, blending.
//!
//! Each span carries its identifying metadata via the `tracing` crate.

/// Create a span covering one `apply` call.
#[macro_export]
macro_rules! session_update_span {
    ($session:expr, $batch_size:expr) => {
        tracing::info_span!("pitwall.update", session = %$session, batch_size = $batch_size)
    };
}

/// Create a projection span.
#[macro_export]
macro_rules! projection_span {
    ($entity_count:expr) => {
        tracing::debug_span!("pitwall.projection", entity_count = $entity_count)
    };
}

/// Create a blending span.
#[macro_export]
macro_rules! blend_span {
    ($strategy:expr, $field_size:expr) => {
        tracing::info_span!("pitwall.blend", strategy = %$strategy, field_size = $field_size)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const UPDATE: &str = "pitwall.update";
    pub const PROJECTION: &str = "pitwall.projection";
    pub const BLEND: &str = "pitwall.blend";
}
