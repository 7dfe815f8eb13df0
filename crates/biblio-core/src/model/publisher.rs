use serde::{Deserialize, Serialize};

/// Publisher - the company a Book is published by
///
/// Identified by `name`. Has no outgoing relationships; Books point at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publisher {
    /// Unique publisher name (identity)
    pub name: String,

    /// Contact email
    pub email: String,

    /// Contact phone number, stored as entered
    pub phone: String,
}

impl Publisher {
    /// Create a new Publisher
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self { name, email, phone }
    }
}
