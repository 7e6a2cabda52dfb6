//! Grouping of commits into package updates.

use std::collections::HashMap;

use squashview_commit::{RawCommit, target_subject};
use squashview_config::ReviewedPattern;
use tracing::info;

use crate::{CoreResult, PackageUpdate};

/// Groups commits, oldest first, into package updates.
///
/// Each commit joins the update named by its autosquash target subject
/// (the subject with any `fixup! `, `amend! ` or `squash! ` prefixes
/// removed). Updates are returned in order of first appearance.
///
/// # Errors
///
/// Returns [`crate::CoreError::InvalidCommit`] if a commit has no subject line.
pub fn group_updates(
    commits: impl IntoIterator<Item = RawCommit>,
    pattern: &ReviewedPattern,
) -> CoreResult<Vec<PackageUpdate>> {
    let mut updates: Vec<PackageUpdate> = Vec::new();
    let mut by_subject: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;

    for commit in commits {
        let target = target_subject(commit.subject()).to_string();
        let index = *by_subject.entry(target).or_insert_with_key(|target| {
            updates.push(PackageUpdate::new(target.clone(), pattern.clone()));
            updates.len() - 1
        });
        updates[index].add_commit(commit)?;
        total += 1;
    }

    info!(commits = total, updates = updates.len(), "grouped commits");
    Ok(updates)
}
