//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A commit that cannot be folded, such as one without a subject line.
    #[error("invalid commit: {0}")]
    InvalidCommit(String),

    /// Git error.
    #[error("git error: {0}")]
    Git(#[from] squashview_git::GitError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] squashview_config::ConfigError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
