//! Error types for the Portico CLI

use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration resolution failures
    #[error(transparent)]
    Config(#[from] portico_common::ConfigurationError),

    /// Output serialization failures
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Everything else
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl portico_common::PorticoError for CliError {}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
