//! Core data models for toko-ledger
//!
//! The ledger has one persisted entity, the transaction, plus the small value
//! types it is built from.

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::{Category, CategoryParseError};
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
