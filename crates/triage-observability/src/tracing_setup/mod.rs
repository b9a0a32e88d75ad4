//! Tracing setup: subscriber installation, span definitions and structured events.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;
use triage_core::config::ObservabilityConfig;

/// Build the env filter: `RUST_LOG` when set and valid, else `config.log_level`,
/// else `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber is already installed; the existing one
/// stays in place, so repeated calls are harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
