use std::fmt;

use serde::{Deserialize, Serialize};

/// A version token extracted from an artifact key.
///
/// Tokens are kept free-form: the naming convention carries whatever
/// string the publisher put between the comma and the closing bracket,
/// semver or not. Callers that want ordering or range checks can go
/// through [`Version::as_semver`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the token against the semantic-version grammar.
    ///
    /// Extraction never requires this to succeed; non-semver tags such
    /// as `latest` simply return `None`.
    pub fn as_semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.0).ok()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
