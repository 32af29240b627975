//! Persistence adapter contract
//!
//! The store only needs durable key/value byte storage. It reads one key at
//! startup and rewrites that key after every mutation.

use std::collections::HashMap;

use crate::error::ExpenseResult;

/// Durable key/value byte-string storage
pub trait PersistenceAdapter {
    /// Read the bytes stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>>;

    /// Replace the bytes stored under `key`
    fn set(&mut self, key: &str, bytes: &[u8]) -> ExpenseResult<()>;
}

impl<A: PersistenceAdapter + ?Sized> PersistenceAdapter for Box<A> {
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        (**self).set(key, bytes)
    }
}

/// In-memory adapter, for tests and for embedding without a disk
#[derive(Debug, Clone, Default)]
pub struct MemoryAdapter {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key, e.g. with previously persisted data
    pub fn with_entry(mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(key.into(), bytes.into());
        self
    }

    /// Borrow the raw bytes under `key`
    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn get(&self, key: &str) -> ExpenseResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> ExpenseResult<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
