//! Review session over a repository.

use squashview_config::{Config, ReviewedPattern};
use squashview_git::{Identity, Repository};
use tracing::{debug, info};

use crate::{CoreResult, PackageUpdate, group_updates};

/// Reads update commits from a repository and folds them for review.
pub struct ReviewSession {
    repo: Repository,
    pattern: ReviewedPattern,
    base: Option<String>,
}

impl ReviewSession {
    /// Creates a session reviewing every commit reachable from `HEAD`.
    #[must_use]
    pub fn new(repo: Repository, pattern: ReviewedPattern) -> Self {
        Self {
            repo,
            pattern,
            base: None,
        }
    }

    /// Creates a session from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the reviewed regex does not compile.
    pub fn from_config(repo: Repository, config: &Config) -> CoreResult<Self> {
        let pattern = config.review.pattern()?;
        Ok(Self::new(repo, pattern).with_base(&config.repository.base))
    }

    /// Only reviews commits that are not reachable from `base`.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Returns the identity suggested in reviewed-by trailers.
    pub fn reviewer(&self) -> Identity {
        self.repo.reviewer_identity()
    }

    /// Reads the commits and groups them into package updates.
    ///
    /// # Errors
    ///
    /// Returns an error if the base cannot be resolved, commits cannot be
    /// read, or a commit has no subject line.
    pub fn updates(&self) -> CoreResult<Vec<PackageUpdate>> {
        debug!(base = ?self.base, "reading update commits");
        let commits = self.repo.commits_since(self.base.as_deref())?;
        info!(count = commits.len(), "found commits to review");

        group_updates(commits, &self.pattern)
    }

    /// Returns the update with the given subject, if present.
    ///
    /// # Errors
    ///
    /// Same as [`ReviewSession::updates`].
    pub fn find(&self, subject: &str) -> CoreResult<Option<PackageUpdate>> {
        Ok(self
            .updates()?
            .into_iter()
            .find(|update| update.subject() == subject))
    }
}
