//! Core library for squashview.
//!
//! This crate folds the commits of a package update the way an
//! autosquashing rebase would, and derives what a reviewer needs from the
//! resulting message:
//! - [`fold`]: autosquash message folding
//! - [`changelog`]: changelog link detection and GitHub mirror normalization
//! - [`linkify`]: HTML rendering of messages with clickable links
//! - [`PackageUpdate`]: one update's commits and derived state
//! - [`ReviewSession`]: updates read from a repository

pub mod changelog;
mod error;
mod fold;
mod grouping;
mod html;
mod reviewed;
mod session;
mod update;

pub use changelog::{ChangelogLink, NO_CHANGELOG};
pub use error::{CoreError, CoreResult};
pub use fold::fold;
pub use grouping::group_updates;
pub use html::linkify;
pub use reviewed::{REVIEWED_BY_TRAILER, reviewed_by_suggestion, reviewed_by_suggestion_markup};
pub use session::ReviewSession;
pub use squashview_config::ReviewedPattern;
pub use update::PackageUpdate;
