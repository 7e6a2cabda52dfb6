//! Reviewer identity.

use std::fmt;

/// Name used when `user.name` cannot be read.
const FALLBACK_NAME: &str = "Foo bar";

/// Email used when `user.email` cannot be read.
const FALLBACK_EMAIL: &str = "123@example.com";

/// The person reviewing updates, as configured in Git.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The `user.name` value.
    pub name: String,

    /// The `user.email` value.
    pub email: String,
}

impl Identity {
    /// Creates a new identity.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the placeholder identity used when Git has none configured.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(FALLBACK_NAME, FALLBACK_EMAIL)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
