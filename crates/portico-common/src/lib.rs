//! Shared foundations for the Portico workspace
//!
//! Error types and logging initialization used by every Portico crate.

pub mod error;
pub mod logging;

pub use error::{ConfigurationError, PorticoError};
