//! Correlation types for tying log events to one interactive session
//!
//! A session spans one run of the menu loop; a transaction id identifies one
//! begin → commit/rollback cycle inside it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of one interactive session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new time-ordered SessionId (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequence number of a transaction within a session
///
/// Starts at 1 and increases by one for every `begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TxId(u64);

impl TxId {
    /// The first transaction of a session
    pub fn first() -> Self {
        Self(1)
    }

    /// The transaction following this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw sequence value
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tx-{}", self.0)
    }
}
