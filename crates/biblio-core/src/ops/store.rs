use crate::errors::Result;
use crate::model::{Entity, EntityKind};

/// Persistence port
///
/// The narrow interface every storage engine implements. Writes are only
/// accepted inside a transaction opened with [`EntityStore::begin`]; reads are
/// allowed at any time and see uncommitted writes of the open transaction.
///
/// # Errors
///
/// `persist` fails with:
/// - `AlreadyExists` when the identity key is taken
/// - `MissingReference` when a Book points at an absent author or publisher,
///   or a membership points at an absent entity
/// - `VariantMismatch` when a membership owner is not an Ad Hoc Team or the
///   member is not an Individual Author
/// - `NoActiveTransaction` outside a transaction
pub trait EntityStore {
    /// Open a transaction; fails with `TransactionAlreadyOpen` if one is open
    fn begin(&mut self) -> Result<()>;

    /// Make every write since `begin` durable
    fn commit(&mut self) -> Result<()>;

    /// Discard every write since `begin`
    fn rollback(&mut self) -> Result<()>;

    fn in_transaction(&self) -> bool;

    /// Insert a new record
    fn persist(&mut self, entity: &Entity) -> Result<()>;

    /// All records of a kind in insertion order
    fn query_all(&self, kind: EntityKind) -> Result<Vec<Entity>>;

    /// Look a record up by its identity key
    fn query_by_key(&self, kind: EntityKind, key: &str) -> Result<Option<Entity>>;
}
