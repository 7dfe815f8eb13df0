//! SQLite repository implementation
//!
//! Row-level reads and writes for every catalogue table. Inserts return the
//! raw `rusqlite::Error` so the caller can classify constraint failures.

use crate::errors::{from_rusqlite, Result};
use crate::repo::hydration::{
    self, author_columns_from_row, book_from_row, membership_from_row, publisher_from_row,
    AUTHOR_COLUMNS, BOOK_COLUMNS, MEMBERSHIP_COLUMNS, PUBLISHER_COLUMNS,
};
use biblio_core::rules::{author_from_columns, AuthorColumns};
use biblio_core::{AuthoringEntity, Book, Publisher, TeamMembership};
use rusqlite::{Connection, OptionalExtension};

/// SQLite repository for catalogue entities
pub struct SqliteRepo;

impl SqliteRepo {
    pub fn insert_publisher(conn: &Connection, publisher: &Publisher) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO publishers (name, email, phone) VALUES (?1, ?2, ?3)",
            rusqlite::params![publisher.name, publisher.email, publisher.phone],
        )?;
        Ok(())
    }

    pub fn insert_book(conn: &Connection, book: &Book) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO books (isbn, title, year_published, authoring_entity_name, publisher_name)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                book.isbn,
                book.title,
                book.year_published,
                book.author_name,
                book.publisher_name,
            ],
        )?;
        Ok(())
    }

    /// Insert an Authoring Entity into the single inheritance table
    pub fn insert_author(conn: &Connection, author: &AuthoringEntity) -> rusqlite::Result<()> {
        let columns = AuthorColumns::from_author(author);
        conn.execute(
            "INSERT INTO authoring_entities (name, email, authoring_entity_type, head_writer,
                 year_formed, individual_authors_email, ad_hoc_teams_email)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                columns.name,
                columns.email,
                columns.authoring_entity_type,
                columns.head_writer,
                columns.year_formed,
                columns.individual_authors_email,
                columns.ad_hoc_teams_email,
            ],
        )?;
        Ok(())
    }

    pub fn insert_membership(
        conn: &Connection,
        membership: &TeamMembership,
    ) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO ad_hoc_team_members (ad_hoc_team_name, individual_author_name)
             VALUES (?1, ?2)",
            rusqlite::params![membership.team_name, membership.member_name],
        )?;
        Ok(())
    }

    pub fn get_publisher(conn: &Connection, name: &str) -> Result<Option<Publisher>> {
        conn.query_row(
            &format!("SELECT {} FROM publishers WHERE name = ?1", PUBLISHER_COLUMNS),
            [name],
            publisher_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn get_book(conn: &Connection, isbn: &str) -> Result<Option<Book>> {
        conn.query_row(
            &format!("SELECT {} FROM books WHERE isbn = ?1", BOOK_COLUMNS),
            [isbn],
            book_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Load one Authoring Entity, checking its variant columns
    pub fn get_author(conn: &Connection, name: &str) -> Result<Option<AuthoringEntity>> {
        let columns = conn
            .query_row(
                &format!(
                    "SELECT {} FROM authoring_entities WHERE name = ?1",
                    AUTHOR_COLUMNS
                ),
                [name],
                author_columns_from_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        columns.map(author_from_columns).transpose()
    }

    pub fn get_membership(
        conn: &Connection,
        team_name: &str,
        member_name: &str,
    ) -> Result<Option<TeamMembership>> {
        conn.query_row(
            &format!(
                "SELECT {} FROM ad_hoc_team_members
                 WHERE ad_hoc_team_name = ?1 AND individual_author_name = ?2",
                MEMBERSHIP_COLUMNS
            ),
            [team_name, member_name],
            membership_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_publishers(conn: &Connection) -> Result<Vec<Publisher>> {
        hydration::load_publishers(conn)
    }

    pub fn list_books(conn: &Connection) -> Result<Vec<Book>> {
        hydration::load_books(conn)
    }

    pub fn list_authors(conn: &Connection) -> Result<Vec<AuthoringEntity>> {
        hydration::load_authors(conn)
    }

    pub fn list_memberships(conn: &Connection) -> Result<Vec<TeamMembership>> {
        hydration::load_memberships(conn)
    }

    /// Authoring entity type stored for `name`, without hydrating the row
    pub fn author_type_of(conn: &Connection, name: &str) -> Result<Option<String>> {
        conn.query_row(
            "SELECT authoring_entity_type FROM authoring_entities WHERE name = ?1",
            [name],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)
    }
}
