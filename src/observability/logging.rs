//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem for binaries
//! - Configure log level from config and environment
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level when set
//! - The library never installs a subscriber on its own

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter directive used when `RUST_LOG` is unset.
pub fn default_directive(log_level: &str) -> String {
    format!("vision_helpers={level},vision_cli={level}", level = log_level)
}

/// Install the global tracing subscriber.
///
/// Returns an error if a subscriber is already installed.
pub fn init(log_level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
}
