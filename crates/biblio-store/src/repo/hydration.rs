//! Hydration layer - rebuilds domain models from SQLite rows
//!
//! Row readers never interpret the author discriminator themselves: columns
//! are read flat and handed to `author_from_columns`, which rejects rows whose
//! variant columns disagree with their type.

use crate::errors::{from_rusqlite, Result};
use biblio_core::rules::{author_from_columns, AuthorColumns};
use biblio_core::{AuthoringEntity, Book, Publisher, TeamMembership};
use rusqlite::{Connection, Row};

pub(crate) const PUBLISHER_COLUMNS: &str = "name, email, phone";
pub(crate) const BOOK_COLUMNS: &str =
    "isbn, title, year_published, authoring_entity_name, publisher_name";
pub(crate) const AUTHOR_COLUMNS: &str = "name, email, authoring_entity_type, head_writer, \
     year_formed, individual_authors_email, ad_hoc_teams_email";
pub(crate) const MEMBERSHIP_COLUMNS: &str = "ad_hoc_team_name, individual_author_name";

pub(crate) fn publisher_from_row(row: &Row<'_>) -> rusqlite::Result<Publisher> {
    Ok(Publisher::new(row.get(0)?, row.get(1)?, row.get(2)?))
}

pub(crate) fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book::new(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

pub(crate) fn author_columns_from_row(row: &Row<'_>) -> rusqlite::Result<AuthorColumns> {
    Ok(AuthorColumns {
        name: row.get(0)?,
        email: row.get(1)?,
        authoring_entity_type: row.get(2)?,
        head_writer: row.get(3)?,
        year_formed: row.get(4)?,
        individual_authors_email: row.get(5)?,
        ad_hoc_teams_email: row.get(6)?,
    })
}

pub(crate) fn membership_from_row(row: &Row<'_>) -> rusqlite::Result<TeamMembership> {
    Ok(TeamMembership::new(row.get(0)?, row.get(1)?))
}

/// Load every Authoring Entity in insertion order
///
/// # Errors
///
/// `CorruptRow` for the first row whose columns are inconsistent.
pub fn load_authors(conn: &Connection) -> Result<Vec<AuthoringEntity>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {} FROM authoring_entities ORDER BY rowid",
            AUTHOR_COLUMNS
        ))
        .map_err(from_rusqlite)?;

    let rows: Vec<AuthorColumns> = stmt
        .query_map([], author_columns_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    rows.into_iter().map(author_from_columns).collect()
}

/// Load every Publisher in insertion order
pub fn load_publishers(conn: &Connection) -> Result<Vec<Publisher>> {
    load_all(conn, "publishers", PUBLISHER_COLUMNS, publisher_from_row)
}

/// Load every Book in insertion order
pub fn load_books(conn: &Connection) -> Result<Vec<Book>> {
    load_all(conn, "books", BOOK_COLUMNS, book_from_row)
}

/// Load every team membership in insertion order
pub fn load_memberships(conn: &Connection) -> Result<Vec<TeamMembership>> {
    load_all(
        conn,
        "ad_hoc_team_members",
        MEMBERSHIP_COLUMNS,
        membership_from_row,
    )
}

fn load_all<T, F>(conn: &Connection, table: &str, columns: &str, map: F) -> Result<Vec<T>>
where
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn
        .prepare(&format!("SELECT {} FROM {} ORDER BY rowid", columns, table))
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], map)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}
