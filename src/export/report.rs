//! Report file export
//!
//! Writes the plain-text financial report to a file named after the store and
//! the report date.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Transaction;
use crate::reports::{generate_report_text, report_file_name, ReportPolicy};

/// Write the report into `dir`, returning the path of the new file
///
/// The directory is created if needed; an existing file for the same date is
/// overwritten.
pub fn export_report_file(
    transactions: &[Transaction],
    today: NaiveDate,
    policy: ReportPolicy,
    store_name: &str,
    dir: &Path,
) -> LedgerResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        LedgerError::Export(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    let path = dir.join(report_file_name(store_name, today));
    let text = generate_report_text(transactions, today, policy, store_name);

    fs::write(&path, text)
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    tracing::info!(path = %path.display(), "Report exported");
    Ok(path)
}
