//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and report views for
//! terminal display.

pub mod report;
pub mod transaction;

pub use report::{
    format_category_reports, format_dashboard, format_period_reports, profit_label,
};
pub use transaction::{format_transaction_details, format_transaction_table};
