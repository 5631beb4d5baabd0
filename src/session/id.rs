//! Session identifier type.

use std::fmt;
use std::str::FromStr;

/// Id reported by sessions that were created without one.
pub const PLACEHOLDER_ID: &str = "mock";

/// Identifier of a mock session.
///
/// Ids are plain strings supplied by the test. There is no generator: a
/// session created without an id reports [`PLACEHOLDER_ID`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session id from any string. No validation is performed.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The placeholder id, `"mock"`.
    pub fn placeholder() -> Self {
        Self(PLACEHOLDER_ID.to_string())
    }

    /// Check whether this is the placeholder id.
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for SessionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SessionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for SessionId {
    type Err = crate::error::MockSessionError;

    /// Parse an id from text, rejecting blank input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::MockSessionError::InvalidSessionId(s.into()));
        }
        Ok(Self(trimmed.to_string()))
    }
}
