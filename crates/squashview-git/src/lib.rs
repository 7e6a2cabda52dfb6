//! Read-only Git access for squashview.
//!
//! This crate provides the Git operations the reviewer needs:
//! - Repository discovery
//! - Commit retrieval in review order, with diff sizes
//! - The reviewer identity from the Git configuration

mod error;
mod identity;
mod repository;

pub use error::{GitError, GitResult};
pub use identity::Identity;
pub use repository::Repository;
