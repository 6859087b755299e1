//! Tracing subscriber setup shared by both binaries.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `level` is an `EnvFilter` directive such as `info` or
/// `backlink_merger=debug,tower_http=info`; `format` is `text` or `json`.
///
/// # Errors
///
/// Returns an error if the directive is invalid or a subscriber is already set.
pub fn init(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}
