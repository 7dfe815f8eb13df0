//! Database connection management

use crate::errors::{from_rusqlite, Result};
use biblio_core::BiblioError;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
///
/// Missing parent directories are created.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| BiblioError::Io {
                message: format!("cannot create {}: {}", parent.display(), e),
            })?;
        }
    }
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection for catalogue use
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;

    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .map_err(from_rusqlite)?;
    if enabled != 1 {
        return Err(BiblioError::Persistence {
            message: "foreign key enforcement is unavailable".to_string(),
        });
    }

    Ok(())
}
