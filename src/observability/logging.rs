//! Structured logging initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level is applied to
/// this crate and `tower_http`.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!(
        "api_console={level},tower_http={level}",
        level = config.log_level
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
