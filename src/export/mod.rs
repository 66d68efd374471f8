//! Export module for toko-ledger
//!
//! - Report: the plain-text financial report as a `.txt` file
//! - JSON: machine-readable full ledger backup
//! - YAML: human-readable full ledger backup
//! - CSV: transactions for spreadsheets

pub mod csv;
pub mod json;
pub mod report;
pub mod yaml;

pub use self::csv::{export_transactions_csv, CSV_HEADER};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use report::export_report_file;
pub use yaml::export_full_yaml;
