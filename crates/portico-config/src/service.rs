//! Service-side configuration sourced from the process environment
//!
//! The API reads its token-verifier settings and the machine-to-machine
//! admin client from environment variables, optionally seeded from a `.env`
//! file. Only configuration lives here; token validation and the token
//! request itself belong to the services consuming these records.

use std::fmt;
use std::path::PathBuf;

use portico_common::ConfigurationError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;

/// Apply a `.env` file to the process environment if one is present.
///
/// Returns the path of the applied file, or `None` when no `.env` exists.
/// Variables already set in the environment are not overridden.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigurationError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("applied environment file: {}", path.display());
            Ok(Some(path))
        }
        Err(err) if err.not_found() => Ok(None),
        Err(err) => Err(ConfigurationError::ParseError {
            details: err.to_string(),
        }),
    }
}

/// Settings used to validate bearer tokens issued by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Identity provider domain
    pub domain: String,

    /// Audience claim expected on incoming tokens
    pub audience: String,

    /// Accepted signing algorithms
    pub algorithms: Vec<String>,
}

impl VerifierConfig {
    /// Resolve verifier settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let config = Self {
            domain: required_var(constants::ENV_VERIFIER_DOMAIN)?,
            audience: required_var(constants::ENV_VERIFIER_AUDIENCE)?,
            algorithms: constants::JWT_ALGORITHMS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        };

        config.validate()?;
        Ok(config)
    }

    /// URL of the provider's signing-key set
    pub fn jwks_url(&self) -> String {
        format!(
            "https://{}/.well-known/jwks.json",
            bare_domain(&self.domain)
        )
    }

    /// Issuer expected on incoming tokens
    pub fn issuer(&self) -> String {
        format!("https://{}/", bare_domain(&self.domain))
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [
            ("verifier.domain", &self.domain),
            ("verifier.audience", &self.audience),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigurationError::empty(name));
            }
        }

        Ok(())
    }
}

/// Machine-to-machine client used to obtain admin tokens
#[derive(Clone, Serialize)]
pub struct AdminClientConfig {
    /// Identity provider domain
    pub domain: String,

    /// Client id of the machine-to-machine application
    pub client_id: String,

    /// Client secret of the machine-to-machine application
    #[serde(skip_serializing)]
    pub client_secret: String,

    /// Audience the requested token is scoped to
    pub audience: String,
}

impl AdminClientConfig {
    /// Resolve the admin client from the process environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        let config = Self {
            domain: required_var(constants::ENV_ADMIN_DOMAIN)?,
            client_id: required_var(constants::ENV_ADMIN_CLIENT_ID)?,
            client_secret: required_var(constants::ENV_ADMIN_CLIENT_SECRET)?,
            audience: required_var(constants::ENV_ADMIN_AUDIENCE)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Token endpoint used for the client-credentials grant
    pub fn token_endpoint(&self) -> String {
        format!("https://{}/oauth/token", bare_domain(&self.domain))
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [
            ("admin.domain", &self.domain),
            ("admin.clientId", &self.client_id),
            ("admin.clientSecret", &self.client_secret),
            ("admin.audience", &self.audience),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigurationError::empty(name));
            }
        }

        Ok(())
    }
}

// The secret must never reach log output.
impl fmt::Debug for AdminClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminClientConfig")
            .field("domain", &self.domain)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("audience", &self.audience)
            .finish()
    }
}

/// Strip scheme and trailing slash so endpoint URLs can be rebuilt uniformly.
fn bare_domain(domain: &str) -> &str {
    domain
        .trim_end_matches('/')
        .trim_start_matches("https://")
        .trim_start_matches("http://")
}

fn required_var(name: &str) -> Result<String, ConfigurationError> {
    std::env::var(name).map_err(|_| ConfigurationError::missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier(domain: &str) -> VerifierConfig {
        VerifierConfig {
            domain: domain.to_string(),
            audience: "menu".to_string(),
            algorithms: vec!["RS256".to_string()],
        }
    }

    #[test]
    fn test_endpoint_urls_from_bare_domain() {
        let config = verifier("tenant.auth0.com");
        assert_eq!(
            config.jwks_url(),
            "https://tenant.auth0.com/.well-known/jwks.json"
        );
        assert_eq!(config.issuer(), "https://tenant.auth0.com/");
    }

    #[test]
    fn test_endpoint_urls_strip_scheme_and_trailing_slash() {
        let config = verifier("https://tenant.auth0.com/");
        assert_eq!(
            config.jwks_url(),
            "https://tenant.auth0.com/.well-known/jwks.json"
        );
        assert_eq!(config.issuer(), "https://tenant.auth0.com/");
    }

    #[test]
    fn test_token_endpoint() {
        let config = AdminClientConfig {
            domain: "tenant.auth0.com".to_string(),
            client_id: "cid".to_string(),
            client_secret: "s3cret".to_string(),
            audience: "admin".to_string(),
        };
        assert_eq!(
            config.token_endpoint(),
            "https://tenant.auth0.com/oauth/token"
        );
    }

    #[test]
    fn test_admin_debug_redacts_secret() {
        let config = AdminClientConfig {
            domain: "tenant.auth0.com".to_string(),
            client_id: "cid".to_string(),
            client_secret: "s3cret".to_string(),
            audience: "admin".to_string(),
        };

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_admin_serialization_skips_secret() {
        let config = AdminClientConfig {
            domain: "tenant.auth0.com".to_string(),
            client_id: "cid".to_string(),
            client_secret: "s3cret".to_string(),
            audience: "admin".to_string(),
        };

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("client_secret").is_none());
        assert_eq!(json["client_id"], "cid");
    }
}
