//! Show command.

use std::fmt::Write;

use anyhow::{Context, Result, bail};
use clap::Args;
use squashview_config::Config;
use squashview_core::{PackageUpdate, reviewed_by_suggestion};
use squashview_git::Identity;

use super::RepoArgs;

/// Arguments for the show command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Subject of the package update
    pub subject: String,

    #[command(flatten)]
    pub repo: RepoArgs,

    /// Print the message as HTML with clickable links
    #[arg(long)]
    pub html: bool,
}

/// Runs the show command.
pub fn run(args: &ShowArgs, config: &Config) -> Result<()> {
    let session = args.repo.session(config)?;
    let Some(update) = session
        .find(&args.subject)
        .context("failed to read package updates")?
    else {
        bail!("no package update with subject {:?}", args.subject);
    };

    println!("{}", render(&update, &session.reviewer(), args.html));
    Ok(())
}

/// Renders one update with its commits, message and review status.
fn render(update: &PackageUpdate, reviewer: &Identity, html: bool) -> String {
    let mut out = String::new();

    _ = writeln!(out, "{}", update.subject());
    _ = writeln!(
        out,
        "Changelog reviewed: {}",
        if update.changes_reviewed() { "yes" } else { "no" }
    );

    _ = writeln!(out, "\nCommits:");
    for commit in update.commits() {
        _ = writeln!(
            out,
            "  {} {:<11} {:<18} {}",
            commit.short_hash(),
            commit.kind(),
            commit.description(),
            commit.subject()
        );
    }

    let message = update.final_commit_message();
    let rich = if html { update.final_commit_message_rich() } else { String::new() };
    _ = writeln!(out, "\nMessage:");
    _ = writeln!(out, "{}", if rich.is_empty() { &message } else { &rich });

    _ = writeln!(out, "\nChangelog:");
    _ = writeln!(out, "{}", update.changelog_link());

    if !update.changes_reviewed() {
        _ = writeln!(out, "\nSuggested trailer:");
        _ = writeln!(out, "{}", reviewed_by_suggestion(reviewer));
    }

    out.trim_end().to_string()
}
