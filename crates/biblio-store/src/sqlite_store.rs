//! `EntityStore` over a single SQLite connection
//!
//! Transactions are plain `BEGIN`/`COMMIT`/`ROLLBACK` statements on the
//! connection; SQLite's autocommit flag is the source of truth for whether one
//! is open. Constraint failures are translated into the core error taxonomy.

use crate::db;
use crate::errors::{constraint_failure, from_rusqlite, ConstraintFailure, Result};
use crate::migrations::apply_migrations;
use crate::repo::SqliteRepo;
use biblio_core::errors::BiblioError;
use biblio_core::model::membership::MEMBERSHIP_KEY_SEPARATOR;
use biblio_core::{
    log_op_end, log_op_error, log_op_start, AuthorType, Entity, EntityKind, EntityStore,
    TeamMembership,
};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// SQLite storage engine
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a catalogue database and bring its schema up to date
    ///
    /// # Errors
    ///
    /// `Io` if the parent directory cannot be created, `Persistence` if the
    /// database cannot be opened, `ChecksumMismatch` if an applied migration
    /// was edited.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_connection(db::open(path)?)
    }

    /// Fresh in-memory catalogue (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Configure and migrate an already opened connection
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn insert(&self, entity: &Entity) -> Result<()> {
        let written = match entity {
            Entity::Publisher(p) => SqliteRepo::insert_publisher(&self.conn, p),
            Entity::Book(b) => SqliteRepo::insert_book(&self.conn, b),
            Entity::Author(a) => SqliteRepo::insert_author(&self.conn, a),
            Entity::TeamMembership(m) => SqliteRepo::insert_membership(&self.conn, m),
        };

        written.map_err(|err| match constraint_failure(&err) {
            Some(ConstraintFailure::Duplicate) => BiblioError::AlreadyExists {
                entity_kind: entity.kind().to_string(),
                key: entity.key(),
            },
            Some(ConstraintFailure::ForeignKey) => self.diagnose_missing_reference(entity),
            Some(ConstraintFailure::Trigger) => self.diagnose_variant_mismatch(entity, &err),
            Some(ConstraintFailure::Other) | None => from_rusqlite(err),
        })
    }

    /// Name the reference that made a foreign key fail
    ///
    /// SQLite does not report which key was violated, so look each one up.
    fn diagnose_missing_reference(&self, entity: &Entity) -> BiblioError {
        let references: Vec<(EntityKind, &str)> = match entity {
            Entity::Book(b) => vec![
                (EntityKind::Author, b.author_name.as_str()),
                (EntityKind::Publisher, b.publisher_name.as_str()),
            ],
            Entity::TeamMembership(m) => vec![
                (EntityKind::Author, m.team_name.as_str()),
                (EntityKind::Author, m.member_name.as_str()),
            ],
            Entity::Publisher(_) | Entity::Author(_) => Vec::new(),
        };

        for (kind, key) in references {
            match self.query_by_key(kind, key) {
                Ok(Some(_)) => continue,
                Ok(None) => {
                    return BiblioError::MissingReference {
                        entity_kind: entity.kind().to_string(),
                        key: entity.key(),
                        referenced_kind: kind.to_string(),
                        referenced_key: key.to_string(),
                    }
                }
                Err(err) => return err,
            }
        }

        BiblioError::Persistence {
            message: format!("foreign key violation writing {} {}", entity.kind(), entity.key()),
        }
    }

    /// Translate a membership trigger abort into a variant mismatch
    fn diagnose_variant_mismatch(&self, entity: &Entity, err: &rusqlite::Error) -> BiblioError {
        let Entity::TeamMembership(m) = entity else {
            return BiblioError::Persistence {
                message: err.to_string(),
            };
        };

        let checks = [
            (m.team_name.as_str(), AuthorType::AdHocTeam),
            (m.member_name.as_str(), AuthorType::IndividualAuthor),
        ];
        for (name, expected) in checks {
            match SqliteRepo::author_type_of(&self.conn, name) {
                Ok(Some(actual)) if actual != expected.as_str() => {
                    let actual = actual
                        .parse::<AuthorType>()
                        .map(|t| t.label().to_string())
                        .unwrap_or(actual);
                    return BiblioError::VariantMismatch {
                        key: name.to_string(),
                        expected: expected.label().to_string(),
                        actual,
                    };
                }
                Ok(_) => continue,
                Err(lookup) => return lookup,
            }
        }

        BiblioError::Persistence {
            message: err.to_string(),
        }
    }
}

impl EntityStore for SqliteStore {
    fn begin(&mut self) -> Result<()> {
        if self.in_transaction() {
            return Err(BiblioError::TransactionAlreadyOpen);
        }
        self.conn.execute_batch("BEGIN").map_err(from_rusqlite)
    }

    fn commit(&mut self) -> Result<()> {
        if !self.in_transaction() {
            return Err(BiblioError::NoActiveTransaction);
        }
        self.conn.execute_batch("COMMIT").map_err(from_rusqlite)
    }

    fn rollback(&mut self) -> Result<()> {
        if !self.in_transaction() {
            return Err(BiblioError::NoActiveTransaction);
        }
        self.conn.execute_batch("ROLLBACK").map_err(from_rusqlite)
    }

    fn in_transaction(&self) -> bool {
        !self.conn.is_autocommit()
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
        let entities = match kind {
            EntityKind::Publisher => into_entities(SqliteRepo::list_publishers(&self.conn)?),
            EntityKind::Book => into_entities(SqliteRepo::list_books(&self.conn)?),
            EntityKind::Author => into_entities(SqliteRepo::list_authors(&self.conn)?),
            EntityKind::TeamMembership => {
                into_entities(SqliteRepo::list_memberships(&self.conn)?)
            }
        };
        Ok(entities)
    }

    fn query_by_key(&self, kind: EntityKind, key: &str) -> Result<Option<Entity>> {
        let entity = match kind {
            EntityKind::Publisher => SqliteRepo::get_publisher(&self.conn, key)?.map(Entity::from),
            EntityKind::Book => SqliteRepo::get_book(&self.conn, key)?.map(Entity::from),
            EntityKind::Author => SqliteRepo::get_author(&self.conn, key)?.map(Entity::from),
            EntityKind::TeamMembership => match TeamMembership::split_key(key) {
                Some((team, member)) => {
                    SqliteRepo::get_membership(&self.conn, team, member)?.map(Entity::from)
                }
                None => {
                    tracing::debug!(
                        key,
                        separator = ?MEMBERSHIP_KEY_SEPARATOR,
                        "membership key without separator"
                    );
                    None
                }
            },
        };
        Ok(entity)
    }
}

fn into_entities<T: Into<Entity>>(rows: Vec<T>) -> Vec<Entity> {
    rows.into_iter().map(Into::into).collect()
}
