//! Configuration management for squashview.
//!
//! This crate handles loading and validating the `squashview.toml`
//! configuration file, and compiles the reviewed-tag pattern it carries.

mod error;
mod loader;
mod pattern;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config_from, load_config, load_or_default};
pub use pattern::{DEFAULT_REVIEWED_REGEX, ReviewedPattern};
pub use schema::{Config, RepositoryConfig, ReviewConfig};
