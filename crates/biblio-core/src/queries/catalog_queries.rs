use crate::errors::Result;
use crate::model::{AuthorType, AuthoringEntity, Book, Entity, EntityKind, Publisher, TeamMembership};
use crate::ops::EntityStore;

/// All Publishers
pub fn list_publishers<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<Publisher>> {
    Ok(store
        .query_all(EntityKind::Publisher)?
        .into_iter()
        .filter_map(Entity::into_publisher)
        .collect())
}

/// All Books
pub fn list_books<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<Book>> {
    Ok(store
        .query_all(EntityKind::Book)?
        .into_iter()
        .filter_map(Entity::into_book)
        .collect())
}

/// All Authoring Entities, every variant
pub fn list_authors<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<AuthoringEntity>> {
    Ok(store
        .query_all(EntityKind::Author)?
        .into_iter()
        .filter_map(Entity::into_author)
        .collect())
}

/// Authoring Entities of one variant
pub fn list_authors_of_type<S: EntityStore + ?Sized>(
    store: &S,
    author_type: AuthorType,
) -> Result<Vec<AuthoringEntity>> {
    Ok(list_authors(store)?
        .into_iter()
        .filter(|a| a.is_a(author_type))
        .collect())
}

pub fn list_writing_groups<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<AuthoringEntity>> {
    list_authors_of_type(store, AuthorType::WritingGroup)
}

pub fn list_individual_authors<S: EntityStore + ?Sized>(
    store: &S,
) -> Result<Vec<AuthoringEntity>> {
    list_authors_of_type(store, AuthorType::IndividualAuthor)
}

pub fn list_ad_hoc_teams<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<AuthoringEntity>> {
    list_authors_of_type(store, AuthorType::AdHocTeam)
}

pub fn find_publisher<S: EntityStore + ?Sized>(store: &S, name: &str) -> Result<Option<Publisher>> {
    Ok(store
        .query_by_key(EntityKind::Publisher, name)?
        .and_then(Entity::into_publisher))
}

pub fn find_book<S: EntityStore + ?Sized>(store: &S, isbn: &str) -> Result<Option<Book>> {
    Ok(store
        .query_by_key(EntityKind::Book, isbn)?
        .and_then(Entity::into_book))
}

pub fn find_author<S: EntityStore + ?Sized>(
    store: &S,
    name: &str,
) -> Result<Option<AuthoringEntity>> {
    Ok(store
        .query_by_key(EntityKind::Author, name)?
        .and_then(Entity::into_author))
}

/// Books written by an Authoring Entity (its "works")
pub fn books_by_author<S: EntityStore + ?Sized>(store: &S, author_name: &str) -> Result<Vec<Book>> {
    Ok(list_books(store)?
        .into_iter()
        .filter(|b| b.is_authored_by(author_name))
        .collect())
}

/// Books issued by a Publisher
pub fn books_by_publisher<S: EntityStore + ?Sized>(
    store: &S,
    publisher_name: &str,
) -> Result<Vec<Book>> {
    Ok(list_books(store)?
        .into_iter()
        .filter(|b| b.is_published_by(publisher_name))
        .collect())
}

fn list_memberships<S: EntityStore + ?Sized>(store: &S) -> Result<Vec<TeamMembership>> {
    Ok(store
        .query_all(EntityKind::TeamMembership)?
        .into_iter()
        .filter_map(Entity::into_membership)
        .collect())
}

/// Individual Authors belonging to an Ad Hoc Team
pub fn team_members<S: EntityStore + ?Sized>(
    store: &S,
    team_name: &str,
) -> Result<Vec<AuthoringEntity>> {
    let member_names: Vec<String> = list_memberships(store)?
        .into_iter()
        .filter(|m| m.team_name == team_name)
        .map(|m| m.member_name)
        .collect();

    Ok(list_authors(store)?
        .into_iter()
        .filter(|a| member_names.contains(&a.name))
        .collect())
}

/// Ad Hoc Teams an Individual Author belongs to
pub fn team_memberships<S: EntityStore + ?Sized>(
    store: &S,
    member_name: &str,
) -> Result<Vec<AuthoringEntity>> {
    let team_names: Vec<String> = list_memberships(store)?
        .into_iter()
        .filter(|m| m.member_name == member_name)
        .map(|m| m.team_name)
        .collect();

    Ok(list_authors(store)?
        .into_iter()
        .filter(|a| team_names.contains(&a.name))
        .collect())
}
