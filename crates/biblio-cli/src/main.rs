//! Biblio
//!
//! Interactive catalogue of books, publishers and authoring entities

use biblio_cli::{AppConfig, Console, Controller};
use biblio_core::errors::Result;
use biblio_core::logging_facility;
use biblio_store::SqliteStore;
use std::io;

fn run() -> Result<()> {
    let config = AppConfig::load()?;
    logging_facility::init_with_filter(config.profile()?, config.log_filter.as_deref());
    tracing::info!(database = %config.database_path.display(), "starting biblio");

    let store = SqliteStore::open(&config.database_path)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    Controller::new(store, console).run()
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
