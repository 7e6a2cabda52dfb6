//! Reviewed-by trailer suggestions.

use html_escape::encode_text;
use squashview_git::Identity;

/// Trailer name the default reviewed pattern looks for.
pub const REVIEWED_BY_TRAILER: &str = "Changelog-reviewed-by";

/// Returns the trailer a reviewer would add to mark a changelog as reviewed.
#[must_use]
pub fn reviewed_by_suggestion(identity: &Identity) -> String {
    format!("{REVIEWED_BY_TRAILER}: {identity}")
}

/// Returns [`reviewed_by_suggestion`] escaped for use in markup.
#[must_use]
pub fn reviewed_by_suggestion_markup(identity: &Identity) -> String {
    encode_text(&reviewed_by_suggestion(identity)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use squashview_config::ReviewedPattern;

    #[test]
    fn test_suggestion() {
        let identity = Identity::new("Jane Doe", "jane@example.com");
        assert_eq!(
            reviewed_by_suggestion(&identity),
            "Changelog-reviewed-by: Jane Doe <jane@example.com>"
        );
    }

    #[test]
    fn test_suggestion_fallback_identity() {
        assert_eq!(
            reviewed_by_suggestion(&Identity::fallback()),
            "Changelog-reviewed-by: Foo bar <123@example.com>"
        );
    }

    #[test]
    fn test_suggestion_markup() {
        let identity = Identity::new("Jane & Co", "jane@example.com");
        assert_eq!(
            reviewed_by_suggestion_markup(&identity),
            "Changelog-reviewed-by: Jane &amp; Co &lt;jane@example.com&gt;"
        );
    }

    #[test]
    fn test_suggestion_satisfies_default_pattern() {
        let line = reviewed_by_suggestion(&Identity::fallback());
        assert!(ReviewedPattern::default().matches(&line));
    }
}
