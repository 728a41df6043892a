//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout only carries the result line. The default
//! filter is `warn`; client errors are logged at `debug` because the CLI
//! already prints them.

use std::io;

use crate::config::Config;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to `warn` when it does not parse.
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber (text or JSON per `LOG_FORMAT`).
pub fn init(config: &Config) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr);

    if config.log_format == "json" {
        builder
            .json()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;
    } else {
        builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;
    }

    Ok(())
}
