//! Client environment record and its sourcing
//!
//! The application consumes one immutable [`EnvironmentConfig`] per process,
//! resolved at startup from the selected [`ConfigSource`]. Sourced fields are
//! copied verbatim; the API base URL and the authentication callback URL are
//! fixed constants applied regardless of source.

use std::path::Path;

use figment::{
    providers::{Format, Json},
    Figment,
};
use portico_common::ConfigurationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;
use crate::source::ConfigSource;

/// Deployment mode a record is resolved for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Local development build
    #[default]
    Development,
    /// Production build
    Production,
}

impl Mode {
    /// Whether this mode is a production deployment
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Identity provider settings of the client environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    /// Identity provider base URL
    pub provider_url: String,

    /// Identifier of the protected resource
    pub audience: String,

    /// Client id registered with the provider
    pub client_id: String,

    /// Redirect target after a completed authentication flow
    pub callback_url: String,
}

/// Immutable environment record consumed by the application
///
/// Constructed once at startup and passed to consumers by value or shared
/// reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Whether this record describes a production deployment
    pub production: bool,

    /// Base URL of the backing API server
    pub api_base_url: String,

    /// Identity provider settings
    pub auth: AuthSettings,
}

impl EnvironmentConfig {
    /// Resolve the record for `mode` from `source`.
    ///
    /// Resolution fails fast: an absent field is a
    /// [`ConfigurationError::MissingField`] naming the environment variable
    /// or JSON path, and an empty field is a
    /// [`ConfigurationError::EmptyField`] naming the record path.
    pub fn load(mode: Mode, source: &ConfigSource) -> Result<Self, ConfigurationError> {
        debug!("resolving {:?} environment from {}", mode, source);

        let config = match source {
            ConfigSource::Environment => Self::from_process_env(mode)?,
            ConfigSource::File(path) => Self::from_file(mode, path)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the non-empty invariant on every field of the record.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("apiBaseUrl", &self.api_base_url),
            ("auth.providerUrl", &self.auth.provider_url),
            ("auth.audience", &self.auth.audience),
            ("auth.clientId", &self.auth.client_id),
            ("auth.callbackUrl", &self.auth.callback_url),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigurationError::empty(name));
            }
        }

        Ok(())
    }

    fn from_process_env(mode: Mode) -> Result<Self, ConfigurationError> {
        Ok(Self {
            production: mode.is_production(),
            api_base_url: constants::API_BASE_URL.to_string(),
            auth: AuthSettings {
                provider_url: required_var(constants::ENV_AUTH_URL)?,
                audience: required_var(constants::ENV_AUTH_AUDIENCE)?,
                client_id: required_var(constants::ENV_AUTH_CLIENT_ID)?,
                callback_url: constants::AUTH_CALLBACK_URL.to_string(),
            },
        })
    }

    fn from_file(mode: Mode, path: &Path) -> Result<Self, ConfigurationError> {
        if !path.exists() {
            return Err(ConfigurationError::ReadError {
                path: path.display().to_string(),
                details: "file not found".to_string(),
            });
        }

        let file: EnvironmentFile = Figment::new()
            .merge(Json::file(path))
            .extract()
            .map_err(|e| ConfigurationError::ParseError {
                details: e.to_string(),
            })?;

        file.into_config(mode)
    }
}

/// On-disk shape of a JSON environment file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentFile {
    /// Identity provider section
    pub auth: Option<AuthSection>,
}

/// `auth` section of an environment file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSection {
    /// Identity provider base URL
    pub url: Option<String>,

    /// Identifier of the protected resource
    pub audience: Option<String>,

    /// Client id registered with the provider
    pub client_id: Option<String>,
}

impl EnvironmentFile {
    /// Example file contents with placeholder values
    pub fn example() -> Self {
        Self {
            auth: Some(AuthSection {
                url: Some("https://your-tenant.auth0.com".to_string()),
                audience: Some("https://api.your-domain.com".to_string()),
                client_id: Some("your-client-id".to_string()),
            }),
        }
    }

    /// Generate example environment file contents
    pub fn generate_example() -> Result<String, ConfigurationError> {
        serde_json::to_string_pretty(&Self::example()).map_err(|e| {
            ConfigurationError::ParseError {
                details: format!("Failed to serialize example config: {e}"),
            }
        })
    }

    fn into_config(self, mode: Mode) -> Result<EnvironmentConfig, ConfigurationError> {
        let auth = self.auth.ok_or_else(|| ConfigurationError::missing("auth"))?;

        Ok(EnvironmentConfig {
            production: mode.is_production(),
            api_base_url: constants::API_BASE_URL.to_string(),
            auth: AuthSettings {
                provider_url: auth
                    .url
                    .ok_or_else(|| ConfigurationError::missing("auth.url"))?,
                audience: auth
                    .audience
                    .ok_or_else(|| ConfigurationError::missing("auth.audience"))?,
                client_id: auth
                    .client_id
                    .ok_or_else(|| ConfigurationError::missing("auth.clientId"))?,
                callback_url: constants::AUTH_CALLBACK_URL.to_string(),
            },
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigurationError> {
    std::env::var(name).map_err(|_| ConfigurationError::missing(name))
}
