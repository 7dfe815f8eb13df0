use std::fmt;

/// Why an operation's transaction was rolled back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackReason {
    /// The user typed `Q`
    Cancelled,
    /// The operation could not start, e.g. a Book with no Publisher to point at
    Precondition(String),
    /// The operation exists in the menu but makes no change
    NotPerformed(String),
    /// The store refused a write
    Rejected(String),
}

impl fmt::Display for RollbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollbackReason::Cancelled => f.write_str("cancelled by user"),
            RollbackReason::Precondition(msg) => write!(f, "precondition not met: {}", msg),
            RollbackReason::NotPerformed(op) => write!(f, "{} not performed", op),
            RollbackReason::Rejected(msg) => write!(f, "rejected: {}", msg),
        }
    }
}

/// Result of one menu operation
///
/// The session loop commits on `Committed` and rolls back otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    RolledBack(RollbackReason),
}

impl Outcome {
    pub fn rolled_back(reason: RollbackReason) -> Self {
        Outcome::RolledBack(reason)
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed)
    }
}
