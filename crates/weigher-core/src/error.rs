//! Error types for the node weigher

use thiserror::Error;

/// Failure of a weighing call
///
/// There is a single kind: no node survived feasibility filtering and
/// scoring. No partial results are ever returned alongside it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeasibilityError {
    /// Every candidate node was filtered out
    #[error("no resources available to schedule container")]
    NoResourcesAvailable,
}

/// Result type for weighing operations
pub type FeasibilityResult<T> = Result<T, FeasibilityError>;

/// Error raised while loading strategy configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Configuration parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeasibilityError::NoResourcesAvailable;
        assert_eq!(
            err.to_string(),
            "no resources available to schedule container"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_config_error_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("strategy = ").unwrap_err();
        let err: ConfigError = toml_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
