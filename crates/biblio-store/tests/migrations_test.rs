// Integration tests for the migration framework

use biblio_core::errors::{BiblioError, ExError, ExErrorKind};
use biblio_store::migrations::{apply_migrations, compute_checksum, get_migrations};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    let tables = get_table_names(&conn);
    for expected in [
        "schema_version",
        "publishers",
        "authoring_entities",
        "books",
        "ad_hoc_team_members",
    ] {
        assert!(
            tables.contains(&expected.to_string()),
            "Missing table: {}",
            expected
        );
    }
}

#[test]
fn test_migrations_are_idempotent() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let recorded: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(recorded, get_migrations().len() as i64);
}

#[test]
fn test_recorded_checksum_matches_embedded_sql() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    for migration in get_migrations() {
        let recorded: String = conn
            .query_row(
                "SELECT checksum FROM schema_version WHERE migration_id = ?1",
                [migration.id],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(recorded, compute_checksum(migration.sql));
    }
}

#[test]
fn test_edited_migration_is_detected() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    conn.execute(
        "UPDATE schema_version SET checksum = 'deadbeef' WHERE migration_id = '001_initial_schema'",
        [],
    )
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    match &err {
        BiblioError::ChecksumMismatch {
            migration_id,
            expected,
            ..
        } => {
            assert_eq!(migration_id, "001_initial_schema");
            assert_eq!(expected, "deadbeef");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let ex: ExError = err.into();
    assert_eq!(ex.kind(), ExErrorKind::ChecksumMismatch);
}
