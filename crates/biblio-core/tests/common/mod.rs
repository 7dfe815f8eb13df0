use biblio_core::{AuthoringEntity, Book, EntityStore, MemoryStore, Publisher, TeamMembership};

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> MemoryStore {
    MemoryStore::new()
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
pub fn individual(name: &str) -> AuthoringEntity {
    AuthoringEntity::individual_author(
        name.to_string(),
        format!("{}@x.com", name.to_lowercase().replace(' ', ".")),
        "me@home.example".to_string(),
    )
}

#[allow(dead_code)]
pub fn team(name: &str) -> AuthoringEntity {
    AuthoringEntity::ad_hoc_team(
        name.to_string(),
        "team@x.com".to_string(),
        "shared@team.example".to_string(),
    )
}

#[allow(dead_code)]
pub fn sample_book(author_name: &str, publisher_name: &str) -> Book {
    Book::new(
        "978-0-00-000000-1".to_string(),
        "Sample".to_string(),
        2020,
        author_name.to_string(),
        publisher_name.to_string(),
    )
}

/// Persist every entity in one committed transaction
///
/// Test setup helper; panics on any store error.
#[allow(dead_code)]
pub fn seed<S: EntityStore>(store: &mut S, entities: Vec<biblio_core::Entity>) {
    store.begin().unwrap();
    for entity in &entities {
        store.persist(entity).unwrap();
    }
    store.commit().unwrap();
}

/// A populated catalogue: one publisher, every author variant, one book
/// and one team membership
#[allow(dead_code)]
pub fn seeded_store() -> MemoryStore {
    let mut store = new_store();
    seed(
        &mut store,
        vec![
            ace_books().into(),
            night_owls().into(),
            individual("A. Writer").into(),
            individual("B. Scribe").into(),
            team("The Collective").into(),
            sample_book("Night Owls", "Ace Books").into(),
            TeamMembership::new("The Collective".to_string(), "A. Writer".to_string()).into(),
        ],
    );
    store
}
