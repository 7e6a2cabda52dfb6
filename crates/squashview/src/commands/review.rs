//! Review command.

use std::fmt::Write;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use squashview_config::Config;
use squashview_core::{NO_CHANGELOG, PackageUpdate};
use tracing::info;

use super::RepoArgs;

/// Output format.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable listing
    #[default]
    Text,
    /// JSON array of updates
    Json,
}

/// Arguments for the review command.
#[derive(Debug, Args)]
pub struct ReviewArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Only list updates whose changelog has not been reviewed
    #[arg(short, long)]
    pub pending: bool,
}

/// Runs the review command.
pub fn run(args: &ReviewArgs, config: &Config) -> Result<()> {
    let session = args.repo.session(config)?;
    let mut updates = session.updates().context("failed to read package updates")?;

    if args.pending {
        updates.retain(|update| !update.changes_reviewed());
    }
    info!(count = updates.len(), "listing package updates");

    let output = match args.format {
        OutputFormat::Text => render_text(&updates),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&updates).context("failed to serialize updates")?
        }
    };
    println!("{output}");
    Ok(())
}

/// Renders updates as a plain listing, one block per update.
fn render_text(updates: &[PackageUpdate]) -> String {
    let mut out = String::new();

    for update in updates {
        let mark = if update.changes_reviewed() { 'x' } else { ' ' };
        let count = update.commits().len();
        let noun = if count == 1 { "commit" } else { "commits" };
        _ = writeln!(out, "[{mark}] {} ({count} {noun})", update.subject());

        match update.changelog() {
            Some(link) if link.is_mirrored() => {
                _ = writeln!(out, "    {}", link.canonical);
                _ = writeln!(out, "    {}", link.url);
            }
            Some(link) => {
                _ = writeln!(out, "    {}", link.url);
            }
            None => {
                _ = writeln!(out, "    {NO_CHANGELOG}");
            }
        }
    }

    if updates.is_empty() {
        out.push_str("No package updates found.\n");
    }

    out.trim_end().to_string()
}
