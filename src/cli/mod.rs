//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod report;
pub mod transaction;

pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use report::{handle_report_command, handle_summary_command, ReportArgs, ReportView};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money};

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(date_str: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        LedgerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

/// The given date, or today's local date when none was passed
pub fn date_or_today(date: Option<&str>) -> LedgerResult<NaiveDate> {
    match date {
        Some(date_str) => parse_date(date_str),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a rupiah amount argument
pub fn parse_amount(amount: &str) -> LedgerResult<Money> {
    Money::parse(amount).map_err(|e| {
        LedgerError::Validation(format!(
            "Invalid amount: '{}'. Use whole rupiah like '15000' or '15.000'. Error: {}",
            amount, e
        ))
    })
}

/// Parse a category name or slug
pub fn parse_category(category: &str) -> LedgerResult<Category> {
    category
        .parse()
        .map_err(|e| LedgerError::Validation(format!("{}", e)))
}
