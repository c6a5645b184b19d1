//! Configuration source selection

use std::fmt;
use std::path::PathBuf;

/// Where a configuration record is resolved from.
///
/// The strategy is chosen explicitly at startup; there is no implicit
/// fallback from one source to the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named process environment variables
    Environment,
    /// A static JSON environment file
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Environment => write!(f, "process environment"),
            Self::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_source() {
        assert_eq!(ConfigSource::Environment.to_string(), "process environment");
        assert_eq!(
            ConfigSource::File(PathBuf::from("config/environment.json")).to_string(),
            "file config/environment.json"
        );
    }
}
