//! Process-wide logging setup.
//!
//! A single explicit initialization call at startup, taking the severity
//! threshold from configuration. `RUST_LOG` still wins when set, so operators
//! can get per-target filtering without touching the application config.

use std::str::FromStr;

use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a severity name (case-insensitive) into a level filter.
pub fn parse_level(level: &str) -> anyhow::Result<LevelFilter> {
    LevelFilter::from_str(level)
        .map_err(|e| anyhow::anyhow!("invalid LOG_LEVEL {:?}: {}", level, e))
}

/// Initialize global logging at the given severity threshold.
///
/// Called once at startup. Re-initialization is not supported; the subscriber
/// registry rejects a second install.
pub fn init(level: &str) -> anyhow::Result<()> {
    let threshold = parse_level(level)?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::default().add_directive(threshold.into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
