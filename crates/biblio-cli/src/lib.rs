//! Biblio CLI - interactive catalogue of books, publishers and authors
//!
//! The binary wires configuration, logging and the SQLite store into a
//! [`Controller`](workflow::Controller) that drives the numbered menus over
//! stdin and stdout.

pub mod config;
pub mod console;
pub mod workflow;

pub use config::AppConfig;
pub use console::{Console, Flow, Interrupt, Menu};
pub use workflow::{Controller, Outcome, RollbackReason};
