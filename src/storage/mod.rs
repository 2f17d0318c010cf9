//! Storage layer for fintrack
//!
//! Provides the key-value abstraction the transaction collection is persisted
//! through, with a file-backed implementation (atomic writes) and an
//! in-memory fake, plus the transaction store itself.

pub mod kv;
pub mod transactions;

pub use kv::{JsonFileStore, KeyValue, MemoryStore};
pub use transactions::{TransactionStore, STORAGE_KEY};

use crate::config::DataPaths;
use crate::error::FintrackError;

/// Open a transaction store over the default on-disk location
///
/// Resolves the data directory (see [`DataPaths`]), creates it if needed, and
/// returns a store backed by a [`JsonFileStore`] there.
pub fn open_default() -> Result<TransactionStore<JsonFileStore>, FintrackError> {
    let paths = DataPaths::new()?;
    paths.ensure_directories()?;
    Ok(TransactionStore::new(JsonFileStore::new(paths.data_dir())))
}
