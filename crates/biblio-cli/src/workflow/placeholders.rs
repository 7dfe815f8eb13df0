//! Update and Delete
//!
//! Both menu entries exist but perform no mutation. Which fields are editable
//! and how a delete treats dependent books is undecided, so they report the
//! gap instead of guessing.

use super::{Controller, Outcome, RollbackReason};
use crate::console::Flow;
use biblio_core::errors::BiblioError;
use biblio_core::EntityStore;
use std::io::{BufRead, Write};

impl<S, R, W> Controller<S, R, W>
where
    S: EntityStore,
    R: BufRead,
    W: Write,
{
    pub(super) fn update_book(&mut self) -> Flow<Outcome> {
        self.not_performed("Update")
    }

    pub(super) fn delete_book(&mut self) -> Flow<Outcome> {
        self.not_performed("Delete")
    }

    fn not_performed(&mut self, op: &str) -> Flow<Outcome> {
        let err = BiblioError::NotImplemented { op: op.to_string() };
        tracing::info!(op, code = err.kind().code(), "operation not performed");
        self.console.say("")?;
        self.console.say(err.to_string())?;
        Ok(Outcome::rolled_back(RollbackReason::NotPerformed(
            op.to_string(),
        )))
    }
}
