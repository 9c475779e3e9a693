//! Tracing setup: structured logging with span definitions.

pub mod spans;

use std::sync::Once;

use pitwall_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "PITWALL_LOG";

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects `PITWALL_LOG` for filtering, e.g. `PITWALL_LOG=pitwall_belief=debug`.
/// Defaults to `info` level if not set. Idempotent.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}

/// Initialize from config. `PITWALL_LOG` still wins over `log_level`.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        // A host may already have installed a global subscriber; keep theirs.
        let _ = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_test_writer())
                .try_init()
        };
    });
}
