//! Tracing bootstrap.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with JSON output.
///
/// `RUST_LOG` takes precedence over the configured level. The
/// `log`-compatibility layer is enabled by default, so actix's request
/// logger lands in the same subscriber.
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))
}
