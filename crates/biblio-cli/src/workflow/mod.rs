//! Interactive workflow controller
//!
//! A state machine over the Main, Add, Info, Update and Delete menus. Each
//! pass through the main menu runs inside exactly one store transaction,
//! which is committed or rolled back before the menu is shown again.

mod add;
pub mod display;
mod info;
pub mod menus;
pub mod outcome;
mod placeholders;

pub use outcome::{Outcome, RollbackReason};

use crate::console::{Console, Flow, Interrupt};
use biblio_core::errors::{BiblioError, Result};
use biblio_core::{log_op_end, log_op_error, log_op_start, EntityStore};
use biblio_core_types::schema::{OUTCOME_COMMIT, OUTCOME_ROLLBACK};
use biblio_core_types::{SessionId, TxId};
use menus::MainChoice;
use std::io::{BufRead, Write};
use std::time::Instant;

pub struct Controller<S, R, W> {
    store: S,
    console: Console<R, W>,
    session: SessionId,
    next_tx: TxId,
}

impl<S, R, W> Controller<S, R, W>
where
    S: EntityStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, console: Console<R, W>) -> Self {
        Self {
            store,
            console,
            session: SessionId::new(),
            next_tx: TxId::first(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session
    }

    /// Split into the store and console (tests inspect both after a run)
    pub fn into_parts(self) -> (S, Console<R, W>) {
        (self.store, self.console)
    }

    /// Run the menu loop until the user quits or stdin closes
    ///
    /// No transaction is left open when this returns.
    ///
    /// # Errors
    ///
    /// A console I/O failure, or a store failure while beginning or ending a
    /// transaction. Neither can be recovered from inside the session.
    pub fn run(&mut self) -> Result<()> {
        let start = Instant::now();
        log_op_start!("session", session_id = self.session.as_str());

        let result = match self.session_loop() {
            Ok(()) | Err(Interrupt::Cancelled) | Err(Interrupt::EndOfInput) => Ok(()),
            Err(Interrupt::Io(err)) | Err(Interrupt::Store(err)) | Err(Interrupt::Invalid(err)) => {
                Err(err)
            }
        };

        if self.store.in_transaction() {
            if let Err(err) = self.store.rollback() {
                tracing::warn!(error = %err, "rollback after session failure did not complete");
            }
        }

        let duration = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => log_op_end!("session", duration_ms = duration),
            Err(err) => log_op_error!("session", err.clone(), duration_ms = duration),
        }
        result
    }

    fn session_loop(&mut self) -> Flow<()> {
        loop {
            let tx = self.next_tx;
            self.next_tx = tx.next();
            self.store.begin().map_err(Interrupt::Store)?;
            tracing::debug!(session_id = self.session.as_str(), tx_id = tx.value(), "transaction open");

            let choice = match self.console.menu::<MainChoice>() {
                Ok(choice) => choice,
                Err(Interrupt::Cancelled) | Err(Interrupt::EndOfInput) => {
                    self.end_transaction(tx, false)?;
                    self.console.say("")?;
                    self.console.say("Exiting application.")?;
                    return Ok(());
                }
                Err(other) => return Err(other),
            };

            let outcome = self.dispatch(tx, choice)?;
            self.finish(tx, outcome)?;
        }
    }

    /// Run one main-menu operation and turn its interrupts into an outcome
    fn dispatch(&mut self, tx: TxId, choice: MainChoice) -> Flow<Outcome> {
        let op = choice.op_name();
        let start = Instant::now();
        log_op_start!(
            op,
            session_id = self.session.as_str(),
            tx_id = tx.value()
        );

        let result = match choice {
            MainChoice::Add => self.add_menu(),
            MainChoice::Info => self.info_menu(),
            MainChoice::Update => self.update_book(),
            MainChoice::Delete => self.delete_book(),
        };
        let settled = self.settle(result);

        let duration = start.elapsed().as_millis() as u64;
        match &settled {
            Ok(outcome) => {
                let label = if outcome.is_committed() {
                    OUTCOME_COMMIT
                } else {
                    OUTCOME_ROLLBACK
                };
                log_op_end!(op, duration_ms = duration, outcome = label);
            }
            Err(Interrupt::Io(err)) | Err(Interrupt::Store(err)) => {
                log_op_error!(op, err.clone(), duration_ms = duration)
            }
            Err(_) => log_op_end!(op, duration_ms = duration, outcome = OUTCOME_ROLLBACK),
        }
        settled
    }

    /// Fold recoverable interrupts into a rollback outcome
    ///
    /// End of input and I/O failures still unwind the session.
    fn settle(&mut self, result: Flow<Outcome>) -> Flow<Outcome> {
        match result {
            Ok(outcome) => Ok(outcome),
            Err(Interrupt::Cancelled) => Ok(Outcome::rolled_back(RollbackReason::Cancelled)),
            Err(Interrupt::Store(err)) | Err(Interrupt::Invalid(err)) => {
                self.console.say(format!("Error: {}", err))?;
                Ok(Outcome::rolled_back(RollbackReason::Rejected(
                    err.to_string(),
                )))
            }
            Err(other) => Err(other),
        }
    }

    /// Commit or roll back according to the outcome
    fn finish(&mut self, tx: TxId, outcome: Outcome) -> Flow<()> {
        match outcome {
            Outcome::Committed => match self.end_transaction(tx, true) {
                Ok(()) => {
                    self.console.say("")?;
                    self.console
                        .say("Successful transaction, committing to database.")
                }
                Err(Interrupt::Store(err)) => {
                    if self.store.in_transaction() {
                        self.end_transaction(tx, false)?;
                    }
                    self.console.say("")?;
                    self.console
                        .say(format!("Commit failed: {}. Rolling back changes.", err))
                }
                Err(other) => Err(other),
            },
            Outcome::RolledBack(reason) => {
                self.end_transaction(tx, false)?;
                self.console.say("")?;
                self.console.say(format!(
                    "Transaction failed (or cancelled): {}. Rolling back changes.",
                    reason
                ))
            }
        }
    }

    fn end_transaction(&mut self, tx: TxId, commit: bool) -> Flow<()> {
        let (label, result) = if commit {
            (OUTCOME_COMMIT, self.store.commit())
        } else {
            (OUTCOME_ROLLBACK, self.store.rollback())
        };
        match result {
            Ok(()) => {
                tracing::info!(
                    session_id = self.session.as_str(),
                    tx_id = tx.value(),
                    outcome = label,
                    "transaction closed"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    session_id = self.session.as_str(),
                    tx_id = tx.value(),
                    outcome = label,
                    error = %err,
                    "transaction did not close"
                );
                Err(Interrupt::Store(err))
            }
        }
    }

    /// Report a failed precondition and produce the matching outcome
    fn precondition(&mut self, err: BiblioError, hint: &str) -> Flow<Outcome> {
        self.console.say("")?;
        self.console.say(format!("Error: {}", err))?;
        self.console.say(hint)?;
        Ok(Outcome::rolled_back(RollbackReason::Precondition(
            err.to_string(),
        )))
    }

    /// Run `form` until it produces a value, restarting it from the first
    /// field after any validation failure
    fn restart_on_invalid<T, F>(&mut self, banner: &str, mut form: F) -> Flow<T>
    where
        F: FnMut(&mut Self) -> Flow<T>,
    {
        loop {
            self.console.say("")?;
            self.console.say(format!("******** {} ********", banner))?;
            match form(self) {
                Err(Interrupt::Invalid(err)) => self.console.report(&err)?,
                other => return other,
            }
        }
    }
}
