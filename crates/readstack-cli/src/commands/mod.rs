pub mod list;
pub mod run;

use std::sync::Arc;

use readstack_core::{AppConfig, BookStore};

/// Build the book store from config: the configured library file if present,
/// the sample shelf otherwise.
pub fn open_store(config: &Arc<AppConfig>) -> anyhow::Result<BookStore> {
    match &config.general.library_file {
        Some(path) => Ok(BookStore::load(path)?),
        None => Ok(BookStore::with_samples()),
    }
}
