//! Read-only catalogue queries
//!
//! Side-effect free functions over the persistence port. Results keep the
//! store's return order (insertion order); nothing is cached.

pub mod catalog_queries;

pub use catalog_queries::{
    books_by_author, books_by_publisher, find_author, find_book, find_publisher, list_ad_hoc_teams,
    list_authors, list_authors_of_type, list_books, list_individual_authors, list_publishers,
    list_writing_groups, team_members, team_memberships,
};
