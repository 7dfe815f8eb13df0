//! Migration runner
//!
//! Applies pending migrations in order, one transaction each, and verifies
//! the checksum of every migration that was applied before.

use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};
use crate::migrations::checksums::compute_checksum;
use crate::migrations::embedded::{get_migrations, Migration};
use biblio_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::{Connection, OptionalExtension};
use std::time::Instant;

/// Apply all pending migrations to the database
///
/// # Errors
///
/// `ChecksumMismatch` if an applied migration's recorded checksum differs from
/// the embedded SQL, `Persistence` if a migration fails to execute.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    let start = Instant::now();
    log_op_start!("apply_migrations");

    let result = run_all(conn);

    let duration = start.elapsed().as_millis() as u64;
    match &result {
        Ok(applied) => log_op_end!(
            "apply_migrations",
            duration_ms = duration,
            row_count = *applied
        ),
        Err(err) => log_op_error!("apply_migrations", err.clone(), duration_ms = duration),
    }
    result.map(|_| ())
}

fn run_all(conn: &mut Connection) -> Result<u64> {
    create_schema_version_table(conn)?;

    let mut applied = 0;
    for migration in get_migrations() {
        if apply_migration(conn, &migration)? {
            applied += 1;
        }
    }
    Ok(applied)
}

/// Create the schema_version table if it doesn't exist
fn create_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT NOT NULL
        );",
    )
    .map_err(from_rusqlite)
}

/// Apply a single migration if not already applied
///
/// Returns whether the migration was applied by this call.
fn apply_migration(conn: &mut Connection, migration: &Migration) -> Result<bool> {
    let checksum = compute_checksum(migration.sql);

    let recorded: Option<String> = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [migration.id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if let Some(recorded) = recorded {
        if recorded != checksum {
            return Err(checksum_mismatch(migration.id, &recorded, &checksum));
        }
        return Ok(false);
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?1, ?2, ?3)",
        rusqlite::params![migration.id, now, checksum],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_migrations() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(apply_migrations(&mut conn).is_ok());
    }

    #[test]
    fn test_idempotency() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_migrations(&mut conn).unwrap();
        assert_eq!(run_all(&mut conn).unwrap(), 0);
    }
}
