use thiserror::Error;

/// Result type alias using BiblioError
pub type Result<T> = std::result::Result<T, BiblioError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input validation
    InvalidEncoding,
    EmptyField,
    FieldTooLong,
    NotANumber,
    SelectionOutOfRange,

    // Preconditions
    MissingPrerequisite,

    // Referential integrity
    AlreadyExists,
    MissingReference,
    VariantMismatch,
    InvariantViolation,

    // Transactions
    NoActiveTransaction,
    TransactionAlreadyOpen,

    // Capability gaps
    /// A menu operation that exists but performs no mutation in this build
    NotImplemented,

    // Storage/Integration
    ChecksumMismatch,
    Io,
    Persistence,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidEncoding => "ERR_INVALID_ENCODING",
            ExErrorKind::EmptyField => "ERR_EMPTY_FIELD",
            ExErrorKind::FieldTooLong => "ERR_FIELD_TOO_LONG",
            ExErrorKind::NotANumber => "ERR_NOT_A_NUMBER",
            ExErrorKind::SelectionOutOfRange => "ERR_SELECTION_OUT_OF_RANGE",
            ExErrorKind::MissingPrerequisite => "ERR_MISSING_PREREQUISITE",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::MissingReference => "ERR_MISSING_REFERENCE",
            ExErrorKind::VariantMismatch => "ERR_VARIANT_MISMATCH",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::NoActiveTransaction => "ERR_NO_ACTIVE_TRANSACTION",
            ExErrorKind::TransactionAlreadyOpen => "ERR_TRANSACTION_ALREADY_OPEN",
            ExErrorKind::NotImplemented => "ERR_NOT_IMPLEMENTED",
            ExErrorKind::ChecksumMismatch => "ERR_CHECKSUM_MISMATCH",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }

    /// True for kinds produced by the validation layer at a prompt boundary
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidEncoding
                | ExErrorKind::EmptyField
                | ExErrorKind::FieldTooLong
                | ExErrorKind::NotANumber
                | ExErrorKind::SelectionOutOfRange
        )
    }

    /// True for kinds raised by the store when a write breaks a constraint
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::AlreadyExists
                | ExErrorKind::MissingReference
                | ExErrorKind::VariantMismatch
        )
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging. Domain code raises [`BiblioError`]; it is converted into an
/// `ExError` at logging and reporting boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_kind: Option<String>,
    entity_key: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_kind: None,
            entity_key: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity kind context (e.g. "Publisher")
    pub fn with_entity_kind(mut self, kind: impl Into<String>) -> Self {
        self.entity_kind = Some(kind.into());
        self
    }

    /// Add entity key context (name or ISBN)
    pub fn with_entity_key(mut self, key: impl Into<String>) -> Self {
        self.entity_key = Some(key.into());
        self
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity kind context, if any
    pub fn entity_kind(&self) -> Option<&str> {
        self.entity_kind.as_deref()
    }

    /// Get the entity key context, if any
    pub fn entity_key(&self) -> Option<&str> {
        self.entity_key.as_deref()
    }

    /// Get the field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(kind) = &self.entity_kind {
            write!(f, " (entity_kind: {})", kind)?;
        }
        if let Some(key) = &self.entity_key {
            write!(f, " (entity_key: {})", key)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Biblio operations
///
/// Messages are written for the person at the console: the interactive
/// workflow prints them verbatim before re-asking.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BiblioError {
    // ===== Input Validation =====
    /// A console line was not valid UTF-8
    #[error("Input is not valid UTF-8 text")]
    InvalidEncoding,

    /// A required field was empty or whitespace only
    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    /// A field exceeded its maximum length in characters
    #[error("{field} cannot exceed {max} characters long (got {actual})")]
    FieldTooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    /// A numeric field could not be parsed as an integer
    #[error("{field} must be a whole number (got '{input}')")]
    NotANumber { field: String, input: String },

    /// A list selection was outside `[1, max]`
    #[error("Invalid selection {choice}. Please enter a number 1-{max}")]
    SelectionOutOfRange { choice: i64, max: usize },

    // ===== Preconditions =====
    /// An entity cannot be entered before its prerequisites exist
    #[error("{entity} requires at least one {required}")]
    MissingPrerequisite { entity: String, required: String },

    // ===== Referential Integrity =====
    /// Identity already taken
    #[error("{entity_kind} already exists: {key}")]
    AlreadyExists { entity_kind: String, key: String },

    /// A mandatory foreign key points at nothing
    #[error("{entity_kind} {key} references missing {referenced_kind} {referenced_key}")]
    MissingReference {
        entity_kind: String,
        key: String,
        referenced_kind: String,
        referenced_key: String,
    },

    /// An authoring entity is not the variant a relation requires
    #[error("{key} is a {actual}, expected a {expected}")]
    VariantMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    /// Stored data disagrees with the model's invariants
    #[error("Corrupt {entity_kind} row {key}: {reason}")]
    CorruptRow {
        entity_kind: String,
        key: String,
        reason: String,
    },

    // ===== Transactions =====
    /// A write or commit was attempted with no open transaction
    #[error("No transaction is open")]
    NoActiveTransaction,

    /// `begin` was called while a transaction was already open
    #[error("A transaction is already open")]
    TransactionAlreadyOpen,

    // ===== Capability Gaps =====
    /// The operation is a placeholder that performs no mutation
    #[error("{op} is not available; no changes were made")]
    NotImplemented { op: String },

    // ===== Storage/Integration =====
    /// A migration changed after it was applied
    #[error("Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        migration_id: String,
        expected: String,
        actual: String,
    },

    /// Storage engine failure that is not a constraint violation
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Console or filesystem failure
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl BiblioError {
    /// Classify this error in the canonical taxonomy
    pub fn kind(&self) -> ExErrorKind {
        match self {
            BiblioError::InvalidEncoding => ExErrorKind::InvalidEncoding,
            BiblioError::EmptyField { .. } => ExErrorKind::EmptyField,
            BiblioError::FieldTooLong { .. } => ExErrorKind::FieldTooLong,
            BiblioError::NotANumber { .. } => ExErrorKind::NotANumber,
            BiblioError::SelectionOutOfRange { .. } => ExErrorKind::SelectionOutOfRange,
            BiblioError::MissingPrerequisite { .. } => ExErrorKind::MissingPrerequisite,
            BiblioError::AlreadyExists { .. } => ExErrorKind::AlreadyExists,
            BiblioError::MissingReference { .. } => ExErrorKind::MissingReference,
            BiblioError::VariantMismatch { .. } => ExErrorKind::VariantMismatch,
            BiblioError::CorruptRow { .. } => ExErrorKind::InvariantViolation,
            BiblioError::NoActiveTransaction => ExErrorKind::NoActiveTransaction,
            BiblioError::TransactionAlreadyOpen => ExErrorKind::TransactionAlreadyOpen,
            BiblioError::NotImplemented { .. } => ExErrorKind::NotImplemented,
            BiblioError::ChecksumMismatch { .. } => ExErrorKind::ChecksumMismatch,
            BiblioError::Persistence { .. } => ExErrorKind::Persistence,
            BiblioError::Config { .. } => ExErrorKind::Config,
            BiblioError::Io { .. } => ExErrorKind::Io,
        }
    }
}

impl From<BiblioError> for ExError {
    fn from(err: BiblioError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        let ex = ExError::new(kind).with_message(message);
        match err {
            BiblioError::EmptyField { field }
            | BiblioError::FieldTooLong { field, .. }
            | BiblioError::NotANumber { field, .. } => ex.with_field(field),

            BiblioError::SelectionOutOfRange { .. } => ex.with_field("selection"),

            BiblioError::MissingPrerequisite { entity, .. } => ex.with_entity_kind(entity),

            BiblioError::AlreadyExists { entity_kind, key }
            | BiblioError::MissingReference {
                entity_kind, key, ..
            }
            | BiblioError::CorruptRow {
                entity_kind, key, ..
            } => ex.with_entity_kind(entity_kind).with_entity_key(key),

            BiblioError::VariantMismatch { key, .. } => {
                ex.with_entity_kind("AuthoringEntity").with_entity_key(key)
            }

            BiblioError::NotImplemented { op } => ex.with_op(op),

            BiblioError::ChecksumMismatch { migration_id, .. } => {
                ex.with_op("migration_checksum").with_entity_key(migration_id)
            }

            BiblioError::InvalidEncoding
            | BiblioError::NoActiveTransaction
            | BiblioError::TransactionAlreadyOpen
            | BiblioError::Persistence { .. }
            | BiblioError::Config { .. }
            | BiblioError::Io { .. } => ex,
        }
    }
}

/// Conversion from std::io::Error to BiblioError
impl From<std::io::Error> for BiblioError {
    fn from(err: std::io::Error) -> Self {
        BiblioError::Io {
            message: err.to_string(),
        }
    }
}
