//! Git repository wrapper.

use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{Commit as Git2Commit, ErrorCode, Oid, Repository as Git2Repo, Sort};
use squashview_commit::RawCommit;
use tracing::{debug, warn};

use crate::{GitError, GitResult, Identity};

/// A read-only Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository from the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover() -> GitResult<Self> {
        Self::discover_from(".")
    }

    /// Discovers the repository containing the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover_from(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the commits reachable from `HEAD` but not from `base`, oldest
    /// first.
    ///
    /// If `base` is `None`, returns every commit reachable from `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot be resolved or commits cannot be read.
    pub fn commits_since(&self, base: Option<&str>) -> GitResult<Vec<RawCommit>> {
        let mut revwalk = self.inner.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::REVERSE)?;
        match revwalk.push_head() {
            Err(err) if err.code() == ErrorCode::UnbornBranch => {
                debug!("HEAD has no commits yet");
                return Ok(Vec::new());
            }
            result => result?,
        }

        if let Some(base) = base {
            let base_oid = self.resolve(base)?;
            debug!(%base, %base_oid, "hiding base revision");
            revwalk.hide(base_oid)?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.inner.find_commit(oid?)?;
            commits.push(self.to_raw(&commit)?);
        }

        debug!(count = commits.len(), "read commits");
        Ok(commits)
    }

    /// Returns the reviewer identity from `user.name` and `user.email`.
    ///
    /// Falls back to [`Identity::fallback`] when either value is missing.
    #[must_use]
    pub fn reviewer_identity(&self) -> Identity {
        let lookup = || -> Result<Identity, git2::Error> {
            let config = self.inner.config()?.snapshot()?;
            let name = config.get_string("user.name")?;
            let email = config.get_string("user.email")?;
            Ok(Identity::new(name, email))
        };

        lookup().unwrap_or_else(|err| {
            warn!(error = %err, "cannot read reviewer identity, using placeholder");
            Identity::fallback()
        })
    }

    fn resolve(&self, revision: &str) -> GitResult<Oid> {
        self.inner
            .revparse_single(revision)
            .and_then(|object| object.peel_to_commit())
            .map(|commit| commit.id())
            .map_err(|_| GitError::RevisionNotFound(revision.to_string()))
    }

    fn to_raw(&self, commit: &Git2Commit<'_>) -> GitResult<RawCommit> {
        let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
        let author = commit.author();
        let time = commit.time();

        let mut raw = RawCommit::new(
            commit.id().to_string(),
            message,
            author.name().unwrap_or("Unknown"),
            author.email().unwrap_or(""),
            Utc.timestamp_opt(time.seconds(), 0)
                .single()
                .unwrap_or_else(Utc::now),
        )
        .with_parent_count(commit.parent_count());

        if commit.parent_count() > 0 {
            let parent_tree = commit.parent(0)?.tree()?;
            let tree = commit.tree()?;
            let diff = self
                .inner
                .diff_tree_to_tree(Some(&parent_tree), Some(&tree), None)?;
            raw = raw.with_diff_deltas(diff.deltas().len());
        }

        Ok(raw)
    }
}
