pub mod author;
pub mod book;
pub mod entity;
pub mod membership;
pub mod publisher;

pub use author::{AdHocTeam, AuthorKind, AuthorType, AuthoringEntity, IndividualAuthor, WritingGroup};
pub use book::Book;
pub use entity::{Entity, EntityKind};
pub use membership::TeamMembership;
pub use publisher::Publisher;
