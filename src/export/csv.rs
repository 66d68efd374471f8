//! CSV Export functionality
//!
//! Exports transactions to CSV for spreadsheets.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionKind;
use crate::storage::Storage;

/// Header row of the transaction CSV
pub const CSV_HEADER: [&str; 6] = ["ID", "Date", "Type", "Category", "Amount", "Description"];

/// Export all transactions to CSV
///
/// Amounts are whole rupiah without grouping; the type column is
/// `income` or `expense`.
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> LedgerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for txn in storage.transactions.all() {
        let kind = match txn.kind {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.to_string(),
                kind.to_string(),
                txn.category.label().to_string(),
                txn.amount.rupiah().to_string(),
                txn.description.clone(),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
