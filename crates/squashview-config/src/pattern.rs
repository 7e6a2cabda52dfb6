//! Reviewed-tag pattern.

use regex::{Regex, RegexBuilder};

use crate::{ConfigError, ConfigResult};

/// Pattern used when no configuration overrides it.
pub const DEFAULT_REVIEWED_REGEX: &str = "^Changelog-reviewed-by: ";

/// A compiled "changelog reviewed" marker.
///
/// The pattern is matched case-insensitively against the start of each
/// line; it does not have to cover the whole line.
#[derive(Debug, Clone)]
pub struct ReviewedPattern {
    regex: Regex,
}

impl ReviewedPattern {
    /// Compiles a reviewed-tag pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRegex`] if the pattern does not compile.
    pub fn new(pattern: &str) -> ConfigResult<Self> {
        let invalid = |source: regex::Error| ConfigError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        };

        // Checked alone so groups like `a)|(b` cannot escape the anchor.
        RegexBuilder::new(pattern).build().map_err(invalid)?;
        let regex = RegexBuilder::new(&format!("^(?:{pattern})"))
            .case_insensitive(true)
            .build()
            .map_err(invalid)?;

        Ok(Self { regex })
    }

    /// Returns true if the line starts with a reviewed tag.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// Returns true if any of the lines starts with a reviewed tag.
    pub fn is_reviewed<I, S>(&self, lines: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().any(|line| self.matches(line.as_ref()))
    }
}

impl Default for ReviewedPattern {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEWED_REGEX).expect("default reviewed regex is valid")
    }
}
