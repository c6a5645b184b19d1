//! # Portico Configuration
//!
//! Typed deployment-environment configuration with pluggable sourcing.
//!
//! ## Features
//!
//! - **Environment records**: an immutable [`EnvironmentConfig`] holding the
//!   API endpoint and identity-provider settings for one deployment
//! - **Pluggable sourcing**: process environment variables or a static JSON
//!   environment file, selected explicitly at startup via [`ConfigSource`]
//! - **Fail-fast resolution**: an absent or empty field is an error naming
//!   the field, never a silently empty record
//! - **Service settings**: the token-verifier and machine-to-machine admin
//!   client records the API reads from its environment
//!
//! The record is constructed once and handed to consumers as a plain value;
//! nothing in this crate keeps global state.

pub mod constants;
pub mod environment;
pub mod service;
pub mod source;

pub use environment::{AuthSettings, EnvironmentConfig, EnvironmentFile, Mode};
pub use service::{AdminClientConfig, VerifierConfig};
pub use source::ConfigSource;

/// Version of the portico-config crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
