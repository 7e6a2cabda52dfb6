//! Commit types for squashview.
//!
//! This crate provides the commit types shared by the other crates:
//! - [`RawCommit`]: A commit as retrieved from Git
//! - [`CommitKind`]: How an autosquashing rebase treats a commit

mod kind;
mod raw;

pub use kind::{AMEND_PREFIX, CommitKind, FIXUP_PREFIX, SQUASH_PREFIX, target_subject};
pub use raw::RawCommit;
