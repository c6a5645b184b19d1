//! Fixed configuration constants compiled into the binary
//!
//! These values are identical for every deployment and are applied
//! regardless of which configuration source is selected.

/// Base URL of the backing API server
pub const API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Redirect target after a completed authentication flow
pub const AUTH_CALLBACK_URL: &str = "http://localhost:8100";

/// Signing algorithms accepted when validating provider tokens
pub const JWT_ALGORITHMS: &[&str] = &["RS256"];

/// Environment variable holding the identity provider base URL
pub const ENV_AUTH_URL: &str = "AUTH0_URL";

/// Environment variable holding the protected-resource audience
pub const ENV_AUTH_AUDIENCE: &str = "AUTH0_AUDIENCE";

/// Environment variable holding the registered client id
pub const ENV_AUTH_CLIENT_ID: &str = "AUTH0_CLIENT_ID";

/// Environment variable holding the token-verifier provider domain
pub const ENV_VERIFIER_DOMAIN: &str = "AUTH0_DOMAIN";

/// Environment variable holding the token-verifier audience
pub const ENV_VERIFIER_AUDIENCE: &str = "API_AUDIENCE";

/// Environment variable holding the admin client provider domain
pub const ENV_ADMIN_DOMAIN: &str = "AUTH0_DOMAIN_I";

/// Environment variable holding the admin client id
pub const ENV_ADMIN_CLIENT_ID: &str = "AUTH0_CLIENT_ID_I";

/// Environment variable holding the admin client secret
pub const ENV_ADMIN_CLIENT_SECRET: &str = "AUTH0_CLIENT_SECRET_I";

/// Environment variable holding the admin client audience
pub const ENV_ADMIN_AUDIENCE: &str = "AUTH0_AUDIENCE_I";
