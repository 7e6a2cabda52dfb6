//! Raw commit type as retrieved from Git.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CommitKind;

/// A commit as retrieved from Git.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// The commit hash (SHA).
    pub hash: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// The commit author name.
    pub author: String,

    /// The commit author email.
    pub email: String,

    /// The commit date.
    pub date: DateTime<Utc>,

    /// Number of parents of the commit.
    #[serde(default)]
    pub parent_count: usize,

    /// Number of deltas in the diff against the first parent.
    ///
    /// `None` for root commits, or when the diff was not computed.
    #[serde(default)]
    pub diff_deltas: Option<usize>,
}

impl RawCommit {
    /// Creates a new raw commit.
    ///
    /// The commit is assumed to have a single parent and no diff summary.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        email: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            hash: hash.into(),
            message: message.into(),
            author: author.into(),
            email: email.into(),
            date,
            parent_count: 1,
            diff_deltas: None,
        }
    }

    /// Sets the number of parents.
    #[must_use]
    pub fn with_parent_count(mut self, parent_count: usize) -> Self {
        self.parent_count = parent_count;
        self
    }

    /// Sets the number of deltas against the first parent.
    #[must_use]
    pub fn with_diff_deltas(mut self, deltas: usize) -> Self {
        self.diff_deltas = Some(deltas);
        self
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short hash (first 7 characters).
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(7)
            .map_or(&self.hash[..], |(end, _)| &self.hash[..end])
    }

    /// Returns how an autosquashing rebase treats this commit.
    #[must_use]
    pub fn kind(&self) -> CommitKind {
        CommitKind::classify(&self.message)
    }

    /// Returns a human readable summary of the diff size.
    ///
    /// Empty for commits without a parent or without a computed diff.
    #[must_use]
    pub fn description(&self) -> String {
        match self.diff_deltas {
            Some(_) if self.parent_count == 0 => String::new(),
            Some(1) => "1 delta in diff".to_string(),
            Some(n) => format!("{n} deltas in diff"),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(hash: &str, message: &str) -> RawCommit {
        RawCommit::new(hash, message, "Test Author", "test@example.com", Utc::now())
    }

    #[test]
    fn test_new() {
        let now = Utc::now();
        let commit = RawCommit::new(
            "abc1234567890",
            "hello: 1.0 -> 1.1",
            "Test Author",
            "test@example.com",
            now,
        );

        assert_eq!(commit.hash, "abc1234567890");
        assert_eq!(commit.message, "hello: 1.0 -> 1.1");
        assert_eq!(commit.author, "Test Author");
        assert_eq!(commit.email, "test@example.com");
        assert_eq!(commit.date, now);
        assert_eq!(commit.parent_count, 1);
        assert_eq!(commit.diff_deltas, None);
    }

    #[test]
    fn test_subject() {
        let commit = make_commit("abc123", "hello: 1.0 -> 1.1\n\nhttps://example.com");
        assert_eq!(commit.subject(), "hello: 1.0 -> 1.1");
    }

    #[test]
    fn test_subject_empty() {
        let commit = make_commit("abc123", "");
        assert_eq!(commit.subject(), "");
    }

    #[test]
    fn test_short_hash() {
        let commit = make_commit("abc1234567890", "message");
        assert_eq!(commit.short_hash(), "abc1234");
    }

    #[test]
    fn test_short_hash_multibyte() {
        let commit = make_commit("ééééééééé", "message");
        assert_eq!(commit.short_hash(), "ééééééé");

        let commit = make_commit("ééééé", "message");
        assert_eq!(commit.short_hash(), "ééééé");
    }

    #[test]
    fn test_short_hash_less_than_7() {
        let commit = make_commit("abc", "message");
        assert_eq!(commit.short_hash(), "abc");
    }

    #[test]
    fn test_kind() {
        let commit = make_commit("abc", "squash! hello: 1.0 -> 1.1\n\nmore");
        assert_eq!(commit.kind(), CommitKind::Squash);
    }

    #[test]
    fn test_description_plural() {
        let commit = make_commit("abc", "msg").with_diff_deltas(3);
        assert_eq!(commit.description(), "3 deltas in diff");
    }

    #[test]
    fn test_description_singular() {
        let commit = make_commit("abc", "msg").with_diff_deltas(1);
        assert_eq!(commit.description(), "1 delta in diff");
    }

    #[test]
    fn test_description_root_commit() {
        let commit = make_commit("abc", "msg")
            .with_parent_count(0)
            .with_diff_deltas(4);
        assert_eq!(commit.description(), "");
    }

    #[test]
    fn test_description_without_diff() {
        let commit = make_commit("abc", "msg");
        assert_eq!(commit.description(), "");
    }

    #[test]
    fn test_serialize_deserialize() {
        let commit = make_commit("abc123", "test message").with_diff_deltas(2);
        let json = serde_json::to_string(&commit).unwrap();
        let deserialized: RawCommit = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, deserialized);
    }
}
