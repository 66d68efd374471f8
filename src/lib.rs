//! toko-ledger - income and expense ledger for a small kiosk
//!
//! Records the kiosk's income and expenses in two fixed business categories
//! and turns them into weekly, monthly and per-category reports plus a
//! plain-text report file.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, transactions and categories
//! - `storage`: JSON file storage layer
//! - `services`: Add, edit and delete with validation
//! - `reports`: The reporting engine (pure functions of transactions and a date)
//! - `display`: Terminal formatting
//! - `export`: Report file and data backups
//! - `cli`: Command handlers for the `toko` binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use toko_ledger::reports::{generate_report_text, ReportPolicy};
//!
//! let text = generate_report_text(&transactions, today, ReportPolicy::Calendar, "Toko DGI");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
