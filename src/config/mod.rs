//! Configuration module for toko-ledger
//!
//! - Path resolution for config, data and backups
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
