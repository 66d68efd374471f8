//! Transaction model
//!
//! A single income or expense entry in the kiosk ledger. The serialized shape
//! is the flat record the app has always stored: `id`, `type`, `amount`,
//! `category`, `date`, `description`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Indonesian label used in reports and listings
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Income => "Pemasukan",
            Self::Expense => "Pengeluaran",
        }
    }

    /// Sign shown in front of an amount in listings
    pub const fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "pemasukan" | "masuk" => Ok(Self::Income),
            "expense" | "pengeluaran" | "keluar" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount in whole Rupiah, never negative
    pub amount: Money,

    /// Business line
    pub category: Category,

    /// Calendar date, no time of day
    pub date: NaiveDate,

    /// Optional note
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        id: TransactionId,
        kind: TransactionKind,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            category,
            date,
            description: String::new(),
        }
    }

    /// Builder-style description setter
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate the data model invariants
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}{}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.kind,
            self.kind.sign(),
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " - {}", self.description)?;
        }
        Ok(())
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serialized_shape() {
        let txn = Transaction::new(
            TransactionId::from_raw(1709251200000),
            TransactionKind::Income,
            Money::from_rupiah(100_000),
            Category::Gas,
            date(2024, 3, 1),
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["id"], 1709251200000i64);
        assert_eq!(value["type"], "income");
        assert_eq!(value["amount"], 100000);
        assert_eq!(value["category"], "Gas");
        assert_eq!(value["date"], "2024-03-01");
        assert_eq!(value["description"], "");
    }

    #[test]
    fn test_description_defaults_when_missing() {
        let json = r#"{"id":1,"type":"expense","amount":30000,"category":"Gas","date":"2024-03-01"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert!(txn.is_expense());
        assert!(txn.description.is_empty());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let txn = Transaction::new(
            TransactionId::from_raw(1),
            TransactionKind::Expense,
            Money::from_rupiah(-1),
            Category::Gas,
            date(2024, 3, 1),
        );
        assert!(txn.validate().is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse(), Ok(TransactionKind::Income));
        assert_eq!("Pengeluaran".parse(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_display_line() {
        let txn = Transaction::new(
            TransactionId::from_raw(1),
            TransactionKind::Expense,
            Money::from_rupiah(30_000),
            Category::Gas,
            date(2024, 3, 1),
        )
        .with_description("isi ulang");
        assert_eq!(
            txn.to_string(),
            "2024-03-01 | Gas | Pengeluaran | -Rp\u{a0}30.000 - isi ulang"
        );
    }
}
