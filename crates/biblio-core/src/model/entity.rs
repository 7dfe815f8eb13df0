use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AuthoringEntity, Book, Publisher, TeamMembership};

/// Tag of everything the store can persist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Publisher,
    Book,
    Author,
    TeamMembership,
}

impl EntityKind {
    /// Name used in messages, logs and error context
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Publisher => "Publisher",
            EntityKind::Book => "Book",
            EntityKind::Author => "AuthoringEntity",
            EntityKind::TeamMembership => "TeamMembership",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persistable record
///
/// This is the unit the persistence port accepts and returns. Identity keys
/// are the publisher name, the ISBN, the author name, and the composite
/// membership key respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Publisher(Publisher),
    Book(Book),
    Author(AuthoringEntity),
    TeamMembership(TeamMembership),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Publisher(_) => EntityKind::Publisher,
            Entity::Book(_) => EntityKind::Book,
            Entity::Author(_) => EntityKind::Author,
            Entity::TeamMembership(_) => EntityKind::TeamMembership,
        }
    }

    /// Identity key of this record
    pub fn key(&self) -> String {
        match self {
            Entity::Publisher(p) => p.name.clone(),
            Entity::Book(b) => b.isbn.clone(),
            Entity::Author(a) => a.name.clone(),
            Entity::TeamMembership(m) => m.key(),
        }
    }

    pub fn into_publisher(self) -> Option<Publisher> {
        match self {
            Entity::Publisher(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_book(self) -> Option<Book> {
        match self {
            Entity::Book(b) => Some(b),
            _ => None,
        }
    }

    pub fn into_author(self) -> Option<AuthoringEntity> {
        match self {
            Entity::Author(a) => Some(a),
            _ => None,
        }
    }

    pub fn into_membership(self) -> Option<TeamMembership> {
        match self {
            Entity::TeamMembership(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Publisher> for Entity {
    fn from(p: Publisher) -> Self {
        Entity::Publisher(p)
    }
}

impl From<Book> for Entity {
    fn from(b: Book) -> Self {
        Entity::Book(b)
    }
}

impl From<AuthoringEntity> for Entity {
    fn from(a: AuthoringEntity) -> Self {
        Entity::Author(a)
    }
}

impl From<TeamMembership> for Entity {
    fn from(m: TeamMembership) -> Self {
        Entity::TeamMembership(m)
    }
}
