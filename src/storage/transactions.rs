//! Transaction store for JSON storage
//!
//! Holds the transaction list in memory, in insertion order, and loads/saves
//! it as `transactions.json`.

use std::path::PathBuf;

use crate::error::LedgerError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// The ledger's transaction list and where it is persisted
pub struct TransactionStore {
    path: PathBuf,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            transactions: Vec::new(),
        }
    }

    /// Load transactions from disk
    ///
    /// A missing file means an empty ledger. A file that can't be read or
    /// parsed is logged and also treated as an empty ledger, so callers never
    /// see a partial list.
    pub fn load(&mut self) {
        let data: TransactionData = match read_json(&self.path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Transaction file unreadable, starting empty"
                );
                TransactionData::default()
            }
        };
        self.transactions = data.transactions;
        tracing::debug!(count = self.transactions.len(), "Loaded transactions");
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let file_data = TransactionData {
            transactions: self.transactions.clone(),
        };
        write_json_atomic(&self.path, &file_data)?;
        tracing::debug!(count = self.transactions.len(), "Saved transactions");
        Ok(())
    }

    /// All transactions, in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Largest id issued so far
    pub fn latest_id(&self) -> Option<TransactionId> {
        self.transactions.iter().map(|t| t.id).max()
    }

    /// Append a transaction
    pub fn insert(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Replace the transaction with the same id, keeping its position
    ///
    /// Returns false if no transaction has that id.
    pub fn replace(&mut self, txn: Transaction) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                true
            }
            None => false,
        }
    }

    /// Remove a transaction, returning it if it existed
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(index))
    }

    /// Remove every transaction, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let count = self.transactions.len();
        self.transactions.clear();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample(id: i64) -> Transaction {
        Transaction::new(
            TransactionId::from_raw(id),
            TransactionKind::Income,
            Money::from_rupiah(5_000),
            Category::Gas,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    fn store(temp_dir: &TempDir) -> TransactionStore {
        TransactionStore::new(temp_dir.path().join("transactions.json"))
    }

    #[test]
    fn test_save_and_load_keeps_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut s = store(&temp_dir);
        s.insert(sample(3));
        s.insert(sample(1));
        s.insert(sample(2));
        s.save().unwrap();

        let mut loaded = store(&temp_dir);
        loaded.load();
        let ids: Vec<_> = loaded.all().iter().map(|t| t.id.raw()).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert_eq!(loaded.latest_id(), Some(TransactionId::from_raw(3)));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let mut s = store(&temp_dir);
        s.load();
        assert!(s.is_empty());
        assert_eq!(s.latest_id(), None);
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("transactions.json"), "{\"transactions\": [").unwrap();

        let mut s = store(&temp_dir);
        s.insert(sample(1));
        s.load();
        assert!(s.is_empty());
    }

    #[test]
    fn test_replace_remove_clear() {
        let temp_dir = TempDir::new().unwrap();
        let mut s = store(&temp_dir);
        s.insert(sample(1));
        s.insert(sample(2));

        let mut edited = sample(1);
        edited.amount = Money::from_rupiah(9_000);
        assert!(s.replace(edited));
        assert_eq!(s.all()[0].amount, Money::from_rupiah(9_000));
        assert!(!s.replace(sample(99)));

        assert!(s.remove(TransactionId::from_raw(2)).is_some());
        assert!(s.remove(TransactionId::from_raw(2)).is_none());
        assert_eq!(s.len(), 1);

        assert_eq!(s.clear(), 1);
        assert!(s.is_empty());
    }
}
