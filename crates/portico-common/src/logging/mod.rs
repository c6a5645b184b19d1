//! Unified logging initialization for all Portico binaries
//!
//! The effective filter is resolved in priority order:
//! 1. CLI flags (`-v/-q`) - highest priority
//! 2. RUST_LOG environment variable
//! 3. Binary-specific defaults - lowest priority

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with the specified verbosity level and default filter.
///
/// # Arguments
///
/// * `verbosity` - The verbosity flags from clap (-v/-q)
/// * `default_filter` - The default filter string if no CLI flags or RUST_LOG are set
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    // Check if verbosity flags were explicitly used
    let filter = if let Some(log_level) = verbosity.log_level() {
        // CLI flags take priority
        EnvFilter::try_new(format!("{}", log_level))?
    } else {
        // Fall back to RUST_LOG, then default
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .compact(),
        )
        .init();

    Ok(())
}

/// Initialize logging for user-facing CLI tools.
///
/// The CLI prints its result to stdout and should stay quiet unless the
/// user asked for logging via flags or RUST_LOG.
///
/// # Returns
///
/// * `true` if logging was initialized
/// * `false` if logging was not initialized (no flags and no RUST_LOG)
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<bool> {
    if verbosity.log_level().is_some() || std::env::var("RUST_LOG").is_ok() {
        init_logging(verbosity, default_filter)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
