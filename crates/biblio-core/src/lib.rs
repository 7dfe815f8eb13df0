//! Biblio Core - entity model, validation and query layer
//!
//! This crate provides the foundational data structures and operations for Biblio,
//! including:
//! - Publisher, Book and the polymorphic Authoring Entity model
//! - The persistence port (`EntityStore`) and an in-memory engine
//! - Read-only queries and derived author views
//! - Field validation and cross-entity prerequisites
//! - Structured error and logging facilities

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

// Re-export commonly used types
pub use errors::{BiblioError, ExError, ExErrorKind, Result};
pub use model::{
    AdHocTeam, AuthorKind, AuthorType, AuthoringEntity, Book, Entity, EntityKind,
    IndividualAuthor, Publisher, TeamMembership, WritingGroup,
};
pub use ops::{EntityStore, MemoryStore};
