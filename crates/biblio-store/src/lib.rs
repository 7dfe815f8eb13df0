//! Biblio Store - SQLite persistence engine
//!
//! Provides:
//! - SQLite schema with an embedded, checksummed migration runner
//! - Repository functions mapping rows to the core entity model
//! - `SqliteStore`, the `EntityStore` implementation used by the CLI

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod sqlite_store;

// Re-export key types
pub use errors::Result;
pub use sqlite_store::SqliteStore;
