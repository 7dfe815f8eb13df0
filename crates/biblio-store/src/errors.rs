//! Error handling for biblio-store
//!
//! The store reports through the core `BiblioError` taxonomy so engines are
//! interchangeable behind `EntityStore`.

use biblio_core::errors::BiblioError;
use rusqlite::ffi;

/// Result type alias using BiblioError
pub type Result<T> = std::result::Result<T, BiblioError>;

/// Classification of a failed write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintFailure {
    /// Primary key or unique index
    Duplicate,
    /// Foreign key points at nothing
    ForeignKey,
    /// A trigger aborted the statement
    Trigger,
    /// CHECK, NOT NULL, or anything else
    Other,
}

/// Classify a rusqlite error by its extended result code
///
/// Returns `None` when the error is not a constraint violation at all.
pub fn constraint_failure(err: &rusqlite::Error) -> Option<ConstraintFailure> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation => {
            Some(match e.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    ConstraintFailure::Duplicate
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintFailure::ForeignKey,
                ffi::SQLITE_CONSTRAINT_TRIGGER => ConstraintFailure::Trigger,
                _ => ConstraintFailure::Other,
            })
        }
        _ => None,
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> BiblioError {
    BiblioError::Persistence {
        message: format!("Migration {} failed: {}", migration_id, reason),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> BiblioError {
    BiblioError::ChecksumMismatch {
        migration_id: migration_id.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> BiblioError {
    BiblioError::Persistence {
        message: err.to_string(),
    }
}
