//! Service-side records resolved from the process environment

use portico_common::ConfigurationError;
use portico_config::{constants, AdminClientConfig, VerifierConfig};
use serial_test::serial;

fn clear_service_vars() {
    for name in [
        constants::ENV_VERIFIER_DOMAIN,
        constants::ENV_VERIFIER_AUDIENCE,
        constants::ENV_ADMIN_DOMAIN,
        constants::ENV_ADMIN_CLIENT_ID,
        constants::ENV_ADMIN_CLIENT_SECRET,
        constants::ENV_ADMIN_AUDIENCE,
    ] {
        std::env::remove_var(name);
    }
}

#[test]
#[serial]
fn verifier_resolves_from_env() {
    clear_service_vars();
    std::env::set_var(constants::ENV_VERIFIER_DOMAIN, "tenant.auth0.com");
    std::env::set_var(constants::ENV_VERIFIER_AUDIENCE, "menu");

    let config = VerifierConfig::from_env().unwrap();

    assert_eq!(config.domain, "tenant.auth0.com");
    assert_eq!(config.audience, "menu");
    assert_eq!(config.algorithms, vec!["RS256".to_string()]);
    assert_eq!(
        config.jwks_url(),
        "https://tenant.auth0.com/.well-known/jwks.json"
    );
    assert_eq!(config.issuer(), "https://tenant.auth0.com/");

    clear_service_vars();
}

#[test]
#[serial]
fn verifier_missing_domain_fails_fast() {
    clear_service_vars();
    std::env::set_var(constants::ENV_VERIFIER_AUDIENCE, "menu");

    let err = VerifierConfig::from_env().unwrap_err();

    match err {
        ConfigurationError::MissingField { field } => {
            assert_eq!(field, constants::ENV_VERIFIER_DOMAIN);
        }
        other => panic!("unexpected error: {other}"),
    }

    clear_service_vars();
}

#[test]
#[serial]
fn admin_client_resolves_from_env() {
    clear_service_vars();
    std::env::set_var(constants::ENV_ADMIN_DOMAIN, "tenant.auth0.com");
    std::env::set_var(constants::ENV_ADMIN_CLIENT_ID, "machine-client");
    std::env::set_var(constants::ENV_ADMIN_CLIENT_SECRET, "machine-secret");
    std::env::set_var(constants::ENV_ADMIN_AUDIENCE, "admin-api");

    let config = AdminClientConfig::from_env().unwrap();

    assert_eq!(config.domain, "tenant.auth0.com");
    assert_eq!(config.client_id, "machine-client");
    assert_eq!(config.client_secret, "machine-secret");
    assert_eq!(config.audience, "admin-api");
    assert_eq!(
        config.token_endpoint(),
        "https://tenant.auth0.com/oauth/token"
    );

    clear_service_vars();
}

#[test]
#[serial]
fn admin_client_missing_secret_fails_fast() {
    clear_service_vars();
    std::env::set_var(constants::ENV_ADMIN_DOMAIN, "tenant.auth0.com");
    std::env::set_var(constants::ENV_ADMIN_CLIENT_ID, "machine-client");
    std::env::set_var(constants::ENV_ADMIN_AUDIENCE, "admin-api");

    let err = AdminClientConfig::from_env().unwrap_err();

    match err {
        ConfigurationError::MissingField { field } => {
            assert_eq!(field, constants::ENV_ADMIN_CLIENT_SECRET);
        }
        other => panic!("unexpected error: {other}"),
    }

    clear_service_vars();
}

#[test]
#[serial]
fn empty_admin_audience_fails_validation() {
    clear_service_vars();
    std::env::set_var(constants::ENV_ADMIN_DOMAIN, "tenant.auth0.com");
    std::env::set_var(constants::ENV_ADMIN_CLIENT_ID, "machine-client");
    std::env::set_var(constants::ENV_ADMIN_CLIENT_SECRET, "machine-secret");
    std::env::set_var(constants::ENV_ADMIN_AUDIENCE, "");

    let err = AdminClientConfig::from_env().unwrap_err();

    match err {
        ConfigurationError::EmptyField { field } => assert_eq!(field, "admin.audience"),
        other => panic!("unexpected error: {other}"),
    }

    clear_service_vars();
}
