use biblio_cli::{Console, Controller};
use biblio_core::{AuthoringEntity, Entity, EntityStore, MemoryStore, Publisher, TeamMembership};
use std::io::Cursor;

/// Drive one whole session over scripted input
///
/// Returns the store (for row assertions) and everything printed to stdout.
#[allow(dead_code)]
pub fn run_session<S: EntityStore>(store: S, input: &str) -> (S, String) {
    run_session_bytes(store, input.as_bytes())
}

/// Like [`run_session`], for input that is not necessarily UTF-8
#[allow(dead_code)]
pub fn run_session_bytes<S: EntityStore>(store: S, input: &[u8]) -> (S, String) {
    let console = Console::new(Cursor::new(input.to_vec()), Vec::new());
    let mut controller = Controller::new(store, console);
    controller.run().unwrap();
    let (store, console) = controller.into_parts();
    (store, String::from_utf8(console.into_output()).unwrap())
}

/// Join input lines with newlines, ending with one
#[allow(dead_code)]
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
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
        "solo@x.com".to_string(),
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
pub fn seed<S: EntityStore>(store: &mut S, entities: Vec<Entity>) {
    store.begin().unwrap();
    for entity in &entities {
        store.persist(entity).unwrap();
    }
    store.commit().unwrap();
}

/// Publisher and Writing Group: just enough for a Book
#[allow(dead_code)]
pub fn book_ready_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    seed(&mut store, vec![ace_books().into(), night_owls().into()]);
    store
}

/// Writing Group, two Individual Authors, and a team holding the first
#[allow(dead_code)]
pub fn authors_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    seed(
        &mut store,
        vec![
            night_owls().into(),
            individual("A. Writer").into(),
            individual("B. Scribe").into(),
            team("The Collective").into(),
            TeamMembership::new("The Collective".to_string(), "A. Writer".to_string()).into(),
        ],
    );
    store
}
