//! Autosquash message folding.
//!
//! Replays what `git rebase --autosquash` does to commit messages, one commit
//! at a time:
//! - `fixup!` commits leave the message untouched
//! - `amend!` commits replace it with their body
//! - `squash!` commits append their body
//! - any other commit appends its subject and body

use squashview_commit::{AMEND_PREFIX, FIXUP_PREFIX, SQUASH_PREFIX};

use crate::{CoreError, CoreResult};

/// Folds one commit message into the accumulated message lines.
///
/// Must be called once per commit, in the order an autosquashing rebase
/// would replay them; folding is not commutative.
///
/// # Errors
///
/// Returns [`CoreError::InvalidCommit`] if the message has no subject line.
pub fn fold(current: &[String], message: &str) -> CoreResult<Vec<String>> {
    let mut lines = message.lines();
    let Some(subject) = lines.next() else {
        return Err(CoreError::InvalidCommit(
            "message has no subject line".to_string(),
        ));
    };
    let body: Vec<&str> = lines.collect();

    if subject.starts_with(FIXUP_PREFIX) {
        return Ok(current.to_vec());
    }

    let mut folded = Vec::with_capacity(current.len() + body.len() + 1);
    let body = if subject.starts_with(AMEND_PREFIX) {
        // Only the blank line after the restated subject is dropped.
        match body.split_first() {
            Some((first, rest)) if first.is_empty() => rest,
            _ => &body[..],
        }
    } else {
        folded.extend_from_slice(current);
        if !subject.starts_with(SQUASH_PREFIX) {
            folded.push(subject.to_string());
        }
        &body[..]
    };

    folded.extend(body.iter().map(|line| (*line).to_string()));
    Ok(folded)
}
