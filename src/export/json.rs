//! JSON Export functionality
//!
//! Exports the whole ledger to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Store the ledger belongs to
    pub store_name: String,

    /// All transactions, in stored order
    pub transactions: Vec<Transaction>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub income_count: usize,
    pub expense_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Build an export of `transactions` stamped with `exported_at`
    pub fn new(transactions: &[Transaction], store_name: &str, exported_at: DateTime<Utc>) -> Self {
        let income_count = transactions.iter().filter(|t| t.is_income()).count();

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            income_count,
            expense_count: transactions.len() - income_count,
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            store_name: store_name.to_string(),
            transactions: transactions.to_vec(),
            metadata,
        }
    }

    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage, store_name: &str) -> Self {
        Self::new(storage.transactions.all(), store_name, Utc::now())
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    store_name: &str,
    writer: &mut W,
    pretty: bool,
) -> LedgerResult<()> {
    let export = FullExport::from_storage(storage, store_name);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
