use pitwall_core::config::ObservabilityConfig;
use pitwall_observability::tracing_setup::spans::names;
use pitwall_observability::{
    blend_span, init_from_config, init_tracing, init_tracing_with_filter, projection_span,
    session_update_span,
};

#[test]
fn init_is_idempotent() {
    init_tracing_with_filter("debug");
    init_tracing();
    init_from_config(&ObservabilityConfig::default());
    tracing::info!("still alive after repeated init");
}

#[test]
fn spans_carry_their_names() {
    init_tracing_with_filter("trace");
    let update = session_update_span!("Bahrain FP1", 20usize);
    let projection = projection_span!(20usize);
    let blend = blend_span!("weighted_sum", 20usize);

    for (span, expected) in [
        (update, names::UPDATE),
        (projection, names::PROJECTION),
        (blend, names::BLEND),
    ] {
        if let Some(meta) = span.metadata() {
            assert_eq!(meta.name(), expected);
        }
    }
}
