//! Subcommands.

pub mod init;
pub mod review;
pub mod show;

use std::path::PathBuf;

use anyhow::{Context, Result};
use squashview_config::Config;
use squashview_core::ReviewSession;
use squashview_git::Repository;

/// Repository selection shared by the reviewing commands.
#[derive(Debug, clap::Args)]
pub struct RepoArgs {
    /// Repository to review (default: from configuration, or discovered)
    #[arg(short, long)]
    pub repo: Option<PathBuf>,

    /// Revision the updates are based on (default: from configuration)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Review every commit reachable from HEAD
    #[arg(long, conflicts_with = "base")]
    pub all: bool,
}

impl RepoArgs {
    /// Opens the repository and builds a review session.
    pub fn session(&self, config: &Config) -> Result<ReviewSession> {
        let repo = match self.repo.as_ref().or(config.repository.path.as_ref()) {
            Some(path) => Repository::discover_from(path),
            None => Repository::discover(),
        }
        .context("failed to open git repository")?;

        let pattern = config
            .review
            .pattern()
            .context("invalid review configuration")?;
        let session = ReviewSession::new(repo, pattern);

        if self.all {
            return Ok(session);
        }

        let base = self.base.as_ref().unwrap_or(&config.repository.base);
        Ok(session.with_base(base))
    }
}
