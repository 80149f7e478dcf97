//! Tracing setup for the guestbook CLI
//!
//! Usage:
//!   guestbook --debug serve                 # Debug logging to console
//!   RUST_LOG=guestbook_server=debug guestbook serve
//!
//! Environment variables:
//!   RUST_LOG                                # Log filter (default: info)

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    pub debug: bool,
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    let fallback = if config.debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize console tracing.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.debug) // Show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
