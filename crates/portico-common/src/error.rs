//! Error types shared across the Portico workspace

use thiserror::Error;

/// Marker trait implemented by every Portico error type
pub trait PorticoError: std::error::Error {}

/// Errors raised while resolving a configuration record
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A required field is absent from the selected source
    #[error("missing configuration field: {field}")]
    MissingField {
        /// Source-level name of the absent field (environment variable
        /// name or JSON path)
        field: String,
    },

    /// A field was sourced but holds an empty value
    #[error("configuration field is empty: {field}")]
    EmptyField {
        /// Record-level path of the empty field
        field: String,
    },

    /// The configuration source could not be read
    #[error("failed to read configuration from {path}: {details}")]
    ReadError {
        /// Path of the unreadable source
        path: String,
        /// Underlying failure
        details: String,
    },

    /// The configuration source could not be parsed
    #[error("failed to parse configuration: {details}")]
    ParseError {
        /// Underlying failure
        details: String,
    },
}

impl PorticoError for ConfigurationError {}

impl ConfigurationError {
    /// A `MissingField` error for the given source-level field name
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// An `EmptyField` error for the given record-level field path
    pub fn empty(field: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
        }
    }

    /// Get error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "PORTICO_CONFIG_MISSING_FIELD",
            Self::EmptyField { .. } => "PORTICO_CONFIG_EMPTY_FIELD",
            Self::ReadError { .. } => "PORTICO_CONFIG_READ_ERROR",
            Self::ParseError { .. } => "PORTICO_CONFIG_PARSE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ConfigurationError::missing("AUTH0_URL").error_code(),
            "PORTICO_CONFIG_MISSING_FIELD"
        );
        assert_eq!(
            ConfigurationError::empty("auth.audience").error_code(),
            "PORTICO_CONFIG_EMPTY_FIELD"
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = ConfigurationError::missing("AUTH0_CLIENT_ID");
        assert_eq!(
            err.to_string(),
            "missing configuration field: AUTH0_CLIENT_ID"
        );

        let err = ConfigurationError::empty("auth.clientId");
        assert_eq!(err.to_string(), "configuration field is empty: auth.clientId");
    }
}
