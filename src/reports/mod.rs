//! Reports module for toko-ledger
//!
//! The reporting engine: calendar ranges, range and category aggregation,
//! weekly/monthly period buckets, and the full text report. Everything here is
//! a pure function of a transaction slice and an explicit reference date.

pub mod aggregate;
pub mod calendar;
pub mod category;
pub mod document;
pub mod period;

pub use aggregate::{aggregate_category, aggregate_range, LedgerSummary, RangeTotals, Totals};
pub use calendar::{month_name, month_range, short_date, week_range, DateRange, MONTH_NAMES};
pub use category::{category_reports, CategoryReport};
pub use document::{generate_report_text, report_file_name, FinancialReport};
pub use period::{
    monthly_reports_for_year, monthly_reports_trailing, weekly_reports_for_month,
    weekly_reports_trailing, PeriodReport, ReportPolicy,
};
