//! Session identifiers.
//!
//! The remote service treats the session id as an opaque string, so callers
//! may wrap any identifier they already track. Fresh identifiers use the ULID
//! format, which keeps them unique and sortable by creation time.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier correlating a sequence of turns into one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Prefix used for generated identifiers.
    pub const PREFIX: &'static str = "sess";

    /// Creates a new session ID with a randomly generated ULID.
    #[must_use]
    pub fn new() -> Self {
        Self(format!("{}_{}", Self::PREFIX, Ulid::new()))
    }

    /// Returns the identifier as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<SessionId> for String {
    fn from(id: SessionId) -> Self {
        id.0
    }
}
