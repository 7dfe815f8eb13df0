use biblio_core::{AuthoringEntity, Book, Entity, EntityStore, Publisher, TeamMembership};
use biblio_store::SqliteStore;
use tempfile::TempDir;

/// Migrated in-memory store
#[allow(dead_code)]
pub fn memory_store() -> SqliteStore {
    SqliteStore::open_in_memory().unwrap()
}

/// Migrated on-disk store inside a fresh temporary directory
///
/// The directory must outlive the store.
#[allow(dead_code)]
pub fn disk_store() -> (TempDir, SqliteStore, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("catalog.db");
    let store = SqliteStore::open(&path).unwrap();
    (dir, store, path)
}

#[allow(dead_code)]
pub fn ace_books() -> Publisher {
    Publisher::new(
        "Ace Books".to_string(),
        "ace@x.com".to_string(),
        "555-0100".to_string(),
    )
}

#[allow(dead_code)]
pub fn night_owls() -> AuthoringEntity {
    AuthoringEntity::writing_group(
        "Night Owls".to_string(),
        "no@x.com".to_string(),
        "J. Doe".to_string(),
        1999,
    )
}

#[allow(dead_code)]
pub fn writer() -> AuthoringEntity {
    AuthoringEntity::individual_author(
        "A. Writer".to_string(),
        "aw@x.com".to_string(),
        "me@home.example".to_string(),
    )
}

#[allow(dead_code)]
pub fn collective() -> AuthoringEntity {
    AuthoringEntity::ad_hoc_team(
        "The Collective".to_string(),
        "tc@x.com".to_string(),
        "shared@team.example".to_string(),
    )
}

#[allow(dead_code)]
pub fn sample_book() -> Book {
    Book::new(
        "978-0-00-000000-1".to_string(),
        "Sample".to_string(),
        2020,
        "Night Owls".to_string(),
        "Ace Books".to_string(),
    )
}

#[allow(dead_code)]
pub fn membership() -> TeamMembership {
    TeamMembership::new("The Collective".to_string(), "A. Writer".to_string())
}

/// Persist every entity in one committed transaction
#[allow(dead_code)]
pub fn seed(store: &mut SqliteStore, entities: Vec<Entity>) {
    store.begin().unwrap();
    for entity in &entities {
        store.persist(entity).unwrap();
    }
    store.commit().unwrap();
}

/// Publisher, every author variant, a book and a membership
#[allow(dead_code)]
pub fn seed_catalogue(store: &mut SqliteStore) {
    seed(
        store,
        vec![
            ace_books().into(),
            night_owls().into(),
            writer().into(),
            collective().into(),
            sample_book().into(),
            membership().into(),
        ],
    );
}

/// Row count of one of the catalogue tables
#[allow(dead_code)]
pub fn count_rows(store: &SqliteStore, table: &str) -> i64 {
    assert!(
        matches!(
            table,
            "publishers" | "authoring_entities" | "books" | "ad_hoc_team_members"
        ),
        "not a catalogue table: {}",
        table
    );
    store
        .connection()
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .unwrap()
}
