use std::time::Instant;

use crate::errors::{BiblioError, Result};
use crate::model::{AuthoringEntity, Book, Entity, EntityKind, Publisher, TeamMembership};
use crate::ops::EntityStore;
use crate::rules::validation;
use crate::{log_op_end, log_op_error, log_op_start};

/// Row storage, kept in insertion order
#[derive(Debug, Clone, Default)]
struct Tables {
    publishers: Vec<Publisher>,
    books: Vec<Book>,
    authors: Vec<AuthoringEntity>,
    memberships: Vec<TeamMembership>,
}

impl Tables {
    fn publisher(&self, name: &str) -> Option<&Publisher> {
        self.publishers.iter().find(|p| p.name == name)
    }

    fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn)
    }

    fn author(&self, name: &str) -> Option<&AuthoringEntity> {
        self.authors.iter().find(|a| a.name == name)
    }

    fn membership(&self, key: &str) -> Option<&TeamMembership> {
        self.memberships.iter().find(|m| m.key() == key)
    }
}

/// In-memory storage engine
///
/// `begin` takes a snapshot of every table and `rollback` restores it, so an
/// aborted operation leaves no trace. Applies the same identity, reference
/// and variant checks as the SQLite schema. Not thread-safe; designed for
/// single-threaded use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Tables,
    snapshot: Option<Tables>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn already_exists(entity: &Entity) -> BiblioError {
        BiblioError::AlreadyExists {
            entity_kind: entity.kind().to_string(),
            key: entity.key(),
        }
    }

    fn missing_reference(
        entity: &Entity,
        referenced_kind: EntityKind,
        referenced_key: &str,
    ) -> BiblioError {
        BiblioError::MissingReference {
            entity_kind: entity.kind().to_string(),
            key: entity.key(),
            referenced_kind: referenced_kind.to_string(),
            referenced_key: referenced_key.to_string(),
        }
    }

    fn insert(&mut self, entity: &Entity) -> Result<()> {
        let tables = &mut self.tables;
        match entity {
            Entity::Publisher(publisher) => {
                if tables.publisher(&publisher.name).is_some() {
                    return Err(Self::already_exists(entity));
                }
                tables.publishers.push(publisher.clone());
            }
            Entity::Book(book) => {
                if tables.book(&book.isbn).is_some() {
                    return Err(Self::already_exists(entity));
                }
                if tables.author(&book.author_name).is_none() {
                    return Err(Self::missing_reference(
                        entity,
                        EntityKind::Author,
                        &book.author_name,
                    ));
                }
                if tables.publisher(&book.publisher_name).is_none() {
                    return Err(Self::missing_reference(
                        entity,
                        EntityKind::Publisher,
                        &book.publisher_name,
                    ));
                }
                tables.books.push(book.clone());
            }
            Entity::Author(author) => {
                if tables.author(&author.name).is_some() {
                    return Err(Self::already_exists(entity));
                }
                tables.authors.push(author.clone());
            }
            Entity::TeamMembership(membership) => {
                let team = tables.author(&membership.team_name).ok_or_else(|| {
                    Self::missing_reference(entity, EntityKind::Author, &membership.team_name)
                })?;
                let member = tables.author(&membership.member_name).ok_or_else(|| {
                    Self::missing_reference(entity, EntityKind::Author, &membership.member_name)
                })?;
                let row = validation::validate_membership(team, member, &tables.memberships)?;
                tables.memberships.push(row);
            }
        }
        Ok(())
    }
}

impl EntityStore for MemoryStore {
    fn begin(&mut self) -> Result<()> {
        if self.snapshot.is_some() {
            return Err(BiblioError::TransactionAlreadyOpen);
        }
        self.snapshot = Some(self.tables.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or(BiblioError::NoActiveTransaction)
    }

    fn rollback(&mut self) -> Result<()> {
        let snapshot = self
            .snapshot
            .take()
            .ok_or(BiblioError::NoActiveTransaction)?;
        self.tables = snapshot;
        Ok(())
    }

    fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    fn persist(&mut self, entity: &Entity) -> Result<()> {
        let start = Instant::now();
        let key = entity.key();
        log_op_start!(
            "persist",
            entity_kind = entity.kind().as_str(),
            entity_key = key.as_str()
        );

        let result = if self.in_transaction() {
            self.insert(entity)
        } else {
            Err(BiblioError::NoActiveTransaction)
        };

        let duration = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => log_op_end!("persist", duration_ms = duration),
            Err(err) => log_op_error!("persist", err.clone(), duration_ms = duration),
        }
        result
    }

    fn query_all(&self, kind: EntityKind) -> Result<Vec<Entity>> {
        let tables = &self.tables;
        let entities = match kind {
            EntityKind::Publisher => tables.publishers.iter().cloned().map(Entity::from).collect(),
            EntityKind::Book => tables.books.iter().cloned().map(Entity::from).collect(),
            EntityKind::Author => tables.authors.iter().cloned().map(Entity::from).collect(),
            EntityKind::TeamMembership => tables
                .memberships
                .iter()
                .cloned()
                .map(Entity::from)
                .collect(),
        };
        Ok(entities)
    }

    fn query_by_key(&self, kind: EntityKind, key: &str) -> Result<Option<Entity>> {
        let tables = &self.tables;
        let entity = match kind {
            EntityKind::Publisher => tables.publisher(key).cloned().map(Entity::from),
            EntityKind::Book => tables.book(key).cloned().map(Entity::from),
            EntityKind::Author => tables.author(key).cloned().map(Entity::from),
            EntityKind::TeamMembership => tables.membership(key).cloned().map(Entity::from),
        };
        Ok(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ace_books() -> Entity {
        Publisher::new(
            "Ace Books".to_string(),
            "ace@x.com".to_string(),
            "555-0100".to_string(),
        )
        .into()
    }

    #[test]
    fn test_persist_requires_transaction() {
        let mut store = MemoryStore::new();
        assert_eq!(
            store.persist(&ace_books()),
            Err(BiblioError::NoActiveTransaction)
        );
    }

    #[test]
    fn test_single_open_transaction() {
        let mut store = MemoryStore::new();
        store.begin().unwrap();
        assert_eq!(store.begin(), Err(BiblioError::TransactionAlreadyOpen));
        store.rollback().unwrap();
        assert!(!store.in_transaction());
        assert_eq!(store.commit(), Err(BiblioError::NoActiveTransaction));
    }

    #[test]
    fn test_rollback_restores_snapshot() {
        let mut store = MemoryStore::new();
        store.begin().unwrap();
        store.persist(&ace_books()).unwrap();
        assert_eq!(store.query_all(EntityKind::Publisher).unwrap().len(), 1);
        store.rollback().unwrap();

        assert!(store.query_all(EntityKind::Publisher).unwrap().is_empty());
    }
}
