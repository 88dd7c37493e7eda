//! Tracing subscriber setup
//!
//! Level comes from `RUST_LOG` when set, otherwise from configuration.
//! The service emits plain events (no spans of its own), so no span
//! lifecycle events are recorded.

use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingConfig};

pub fn init_logging(config: &LoggingConfig) {
    let filter = build_filter(config);

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
}

fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| configured_filter(config))
}

fn configured_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::new(&config.level)
}
