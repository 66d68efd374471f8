//! Storage layer for toko-ledger
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionStore;

use crate::config::paths::LedgerPaths;
use crate::error::LedgerError;

/// Owns the application's persisted state
pub struct Storage {
    paths: LedgerPaths,
    pub transactions: TransactionStore,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: LedgerPaths) -> Result<Self, LedgerError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionStore::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) {
        self.transactions.load();
    }
}
