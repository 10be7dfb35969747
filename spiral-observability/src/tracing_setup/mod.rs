//! Tracing setup: subscriber initialization, span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use spiral_core::config::{ObservabilityConfig, LOG_LEVEL_ENV};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the global subscriber from config.
///
/// `SPIRAL_LOG_LEVEL` wins over `observability.log_level` when set. Output is
/// JSON when `observability.json` is true, human-readable otherwise.
///
/// Idempotent. If another subscriber was installed first it is left alone.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        install(filter, config.json);
    });
}

/// Initialize with an explicit filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
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
        registry.with(fmt::layer().with_target(true)).try_init()
    };
    if result.is_err() {
        tracing::debug!("global subscriber already set, keeping it");
    }
}
