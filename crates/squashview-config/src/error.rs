//! Configuration error types.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(std::path::PathBuf),

    /// Invalid TOML syntax.
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The reviewed-tag pattern does not compile.
    #[error("invalid reviewed regex {pattern:?}: {source}")]
    InvalidRegex {
        /// The offending pattern.
        pattern: String,
        /// The compilation error.
        #[source]
        source: regex::Error,
    },

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_not_found_display() {
        let err = ConfigError::NotFound(PathBuf::from("/path/to/squashview.toml"));
        assert_eq!(
            err.to_string(),
            "configuration file not found: /path/to/squashview.toml"
        );
    }

    #[test]
    fn test_invalid_display() {
        let err = ConfigError::Invalid("base must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: base must not be empty"
        );
    }

    #[test]
    fn test_invalid_regex_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = ConfigError::InvalidRegex {
            pattern: "(".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid reviewed regex \"(\": "));
    }

    #[test]
    fn test_error_is_debug() {
        let err = ConfigError::Invalid("test".to_string());
        let debug = format!("{err:?}");
        assert!(debug.contains("Invalid"));
    }
}
