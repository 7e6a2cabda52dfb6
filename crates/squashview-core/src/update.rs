//! Package update aggregate.

use serde::Serialize;
use squashview_commit::RawCommit;
use squashview_config::ReviewedPattern;
use tracing::debug;

use crate::changelog::{ChangelogLink, render_link};
use crate::{CoreError, CoreResult, fold, linkify};

/// One logical package update and the state derived from its commits.
///
/// Commits are folded into the final message as they are appended; the
/// changelog link and review status are recomputed whenever that message
/// changes. A manual edit through [`PackageUpdate::set_final_message`]
/// stops folding and leaves derived state stale until
/// [`PackageUpdate::recompute`] is called.
#[derive(Debug, Clone, Serialize)]
pub struct PackageUpdate {
    subject: String,
    commits: Vec<RawCommit>,
    message_lines: Vec<String>,
    is_message_edited: bool,
    changelog: Option<ChangelogLink>,
    changelog_link: String,
    changes_reviewed: bool,
    #[serde(skip)]
    pattern: ReviewedPattern,
}

impl PackageUpdate {
    /// Creates an update without commits.
    #[must_use]
    pub fn new(subject: impl Into<String>, pattern: ReviewedPattern) -> Self {
        let mut update = Self {
            subject: subject.into(),
            commits: Vec::new(),
            message_lines: Vec::new(),
            is_message_edited: false,
            changelog: None,
            changelog_link: String::new(),
            changes_reviewed: false,
            pattern,
        };
        update.recompute();
        update
    }

    /// Creates an update and folds the given commits in order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCommit`] if a commit has no subject line.
    pub fn with_commits(
        subject: impl Into<String>,
        commits: impl IntoIterator<Item = RawCommit>,
        pattern: ReviewedPattern,
    ) -> CoreResult<Self> {
        let mut update = Self::new(subject, pattern);
        for commit in commits {
            update.add_commit(commit)?;
        }
        Ok(update)
    }

    /// Appends a commit and folds its message.
    ///
    /// Returns true if the final message changed. The commit is rejected,
    /// and nothing is modified, if its message has no subject line.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCommit`] if the message has no subject line.
    pub fn add_commit(&mut self, commit: RawCommit) -> CoreResult<bool> {
        let folded = fold(&self.message_lines, &commit.message).map_err(|_| {
            CoreError::InvalidCommit(format!("{} has no subject line", commit.short_hash()))
        })?;

        debug!(
            hash = %commit.short_hash(),
            kind = %commit.kind(),
            edited = self.is_message_edited,
            "adding commit"
        );
        self.commits.push(commit);

        if self.is_message_edited || folded == self.message_lines {
            return Ok(false);
        }

        self.message_lines = folded;
        self.recompute();
        Ok(true)
    }

    /// Re-derives the changelog link and review status from the message.
    pub fn recompute(&mut self) {
        self.changes_reviewed = self.pattern.is_reviewed(&self.message_lines);
        self.changelog = ChangelogLink::find(&self.message_lines);
        self.changelog_link = render_link(self.changelog.as_ref());
    }

    /// Replaces the final message with a manual edit.
    ///
    /// Further commits no longer change the message. Derived state is not
    /// updated; call [`PackageUpdate::recompute`] when needed.
    pub fn set_final_message(&mut self, message: &str) {
        self.message_lines = message.lines().map(str::to_string).collect();
        self.is_message_edited = true;
    }

    /// Returns the display subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Returns the commits in review order.
    #[must_use]
    pub fn commits(&self) -> &[RawCommit] {
        &self.commits
    }

    /// Returns the folded message lines.
    #[must_use]
    pub fn message_lines(&self) -> &[String] {
        &self.message_lines
    }

    /// Returns the final commit message.
    #[must_use]
    pub fn final_commit_message(&self) -> String {
        self.message_lines.join("\n")
    }

    /// Returns the final commit message as HTML with clickable links.
    ///
    /// Empty when the message contains no links.
    #[must_use]
    pub fn final_commit_message_rich(&self) -> String {
        linkify(&self.final_commit_message())
    }

    /// Returns true once the message was edited manually.
    #[must_use]
    pub fn is_message_edited(&self) -> bool {
        self.is_message_edited
    }

    /// Returns the detected changelog link, if any.
    #[must_use]
    pub fn changelog(&self) -> Option<&ChangelogLink> {
        self.changelog.as_ref()
    }

    /// Returns the changelog link as an HTML fragment, or the
    /// "No changelog detected." sentinel.
    #[must_use]
    pub fn changelog_link(&self) -> &str {
        &self.changelog_link
    }

    /// Returns true if the message carries a reviewed tag.
    #[must_use]
    pub fn changes_reviewed(&self) -> bool {
        self.changes_reviewed
    }
}
