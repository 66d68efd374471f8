//! Service layer for toko-ledger
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and persistence after each change.

pub mod transaction;

pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
