//! Configuration schema.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult, DEFAULT_REVIEWED_REGEX, ReviewedPattern};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Review configuration.
    #[serde(default)]
    pub review: ReviewConfig,

    /// Repository configuration.
    #[serde(default)]
    pub repository: RepositoryConfig,
}

impl Config {
    /// Checks every value that can only be validated after parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if the reviewed regex does not compile or the base
    /// revision is empty.
    pub fn validate(&self) -> ConfigResult<()> {
        self.review.pattern()?;

        if self.repository.base.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "repository.base must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Review configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Case-insensitive pattern marking a changelog as reviewed.
    #[serde(default = "default_reviewed_regex")]
    pub reviewed_regex: String,
}

impl ReviewConfig {
    /// Compiles the reviewed-tag pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] if the pattern does not compile.
    pub fn pattern(&self) -> ConfigResult<ReviewedPattern> {
        ReviewedPattern::new(&self.reviewed_regex)
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            reviewed_regex: default_reviewed_regex(),
        }
    }
}

fn default_reviewed_regex() -> String {
    DEFAULT_REVIEWED_REGEX.to_string()
}

/// Repository configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Path to the repository. Discovered from the current directory if unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Revision the update commits are based on.
    #[serde(default = "default_base")]
    pub base: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            path: None,
            base: default_base(),
        }
    }
}

fn default_base() -> String {
    "origin/master".to_string()
}
