//! File-backed persistence adapter
//!
//! Each key maps to `<dir>/<key>.json`.

use std::path::PathBuf;

use tracing::debug;

use super::adapter::PersistenceAdapter;
use super::file_io::{read_bytes, write_atomic};
use crate::error::{ExpenseError, ExpenseResult};

/// Stores each key as a JSON file in one directory
#[derive(Debug, Clone)]
pub struct FileAdapter {
    dir: PathBuf,
}

impl FileAdapter {
    /// Create an adapter rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> ExpenseResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(ExpenseError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl PersistenceAdapter for FileAdapter {
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "reading key");
        read_bytes(path)
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), len = bytes.len(), "writing key");
        write_atomic(path, bytes)
    }
}
