//! Autosquash classification of commits.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subject prefix of a commit whose changes are melded into its target.
pub const FIXUP_PREFIX: &str = "fixup! ";

/// Subject prefix of a commit that replaces its target's message.
pub const AMEND_PREFIX: &str = "amend! ";

/// Subject prefix of a commit whose message is appended to its target's.
pub const SQUASH_PREFIX: &str = "squash! ";

/// How an autosquashing rebase treats a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommitKind {
    /// A regular commit that starts or extends a message.
    Initial,
    /// A `fixup!` commit. `empty` is set when it carries no body.
    Fixup {
        /// The commit message consists of the subject only.
        empty: bool,
    },
    /// An `amend!` commit.
    Amend,
    /// A `squash!` commit.
    Squash,
}

impl CommitKind {
    /// Classifies a full commit message by its subject prefix.
    #[must_use]
    pub fn classify(message: &str) -> Self {
        let subject = message.lines().next().unwrap_or("");

        if subject.starts_with(FIXUP_PREFIX) {
            CommitKind::Fixup {
                empty: message.trim() == subject.trim(),
            }
        } else if subject.starts_with(AMEND_PREFIX) {
            CommitKind::Amend
        } else if subject.starts_with(SQUASH_PREFIX) {
            CommitKind::Squash
        } else {
            CommitKind::Initial
        }
    }

    /// Returns a short label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CommitKind::Initial => "initial",
            CommitKind::Fixup { empty: true } => "fixup-empty",
            CommitKind::Fixup { empty: false } => "fixup",
            CommitKind::Amend => "amend",
            CommitKind::Squash => "squash",
        }
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Returns the subject an autosquash commit targets.
///
/// Strips any chain of `fixup! `, `amend! ` and `squash! ` prefixes, so
/// `fixup! squash! foo` targets `foo`. Regular subjects are returned as-is.
#[must_use]
pub fn target_subject(subject: &str) -> &str {
    let mut target = subject;
    loop {
        let stripped = target
            .strip_prefix(FIXUP_PREFIX)
            .or_else(|| target.strip_prefix(AMEND_PREFIX))
            .or_else(|| target.strip_prefix(SQUASH_PREFIX));

        match stripped {
            Some(rest) => target = rest,
            None => return target,
        }
    }
}
