//! Storage layer for the expense tracker
//!
//! The [`ExpenseStore`] holds expenses in memory and mirrors them through a
//! [`PersistenceAdapter`]. Two adapters ship with the crate: an in-memory
//! map and a directory of atomically written JSON files.

pub mod adapter;
pub mod expenses;
pub mod file;
pub mod file_io;

pub use adapter::{MemoryAdapter, PersistenceAdapter};
pub use expenses::{ExpenseStore, Persisted, STORAGE_KEY};
pub use file::FileAdapter;
pub use file_io::{read_bytes, write_atomic};

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the file-backed store under the configured data directory
pub fn open(paths: &ExpensePaths) -> Result<ExpenseStore<FileAdapter>, ExpenseError> {
    paths.ensure_directories()?;
    Ok(ExpenseStore::load(FileAdapter::new(paths.data_dir())))
}
