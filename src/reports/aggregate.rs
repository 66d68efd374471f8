//! Income / expense aggregation
//!
//! Sums over a date range, over a category, and over the whole ledger. All of
//! them degrade to zeros on empty input.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Category, Money, Transaction, TransactionKind};

/// Income, expense and their difference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub profit: Money,
}

impl Totals {
    /// Sum a set of transactions
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income = Money::zero();
        let mut expense = Money::zero();
        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => income += txn.amount,
                TransactionKind::Expense => expense += txn.amount,
            }
        }
        Self {
            income,
            expense,
            profit: income - expense,
        }
    }
}

/// Totals for a date range plus the transactions that fell inside it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RangeTotals {
    pub totals: Totals,
    pub transactions: Vec<Transaction>,
}

/// Aggregate the transactions dated within `start..=end`
pub fn aggregate_range(transactions: &[Transaction], start: NaiveDate, end: NaiveDate) -> RangeTotals {
    let matching: Vec<Transaction> = transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect();

    RangeTotals {
        totals: Totals::from_transactions(&matching),
        transactions: matching,
    }
}

/// Aggregate one category across the whole transaction set
pub fn aggregate_category(transactions: &[Transaction], category: Category) -> Totals {
    Totals::from_transactions(transactions.iter().filter(|t| t.category == category))
}

/// Whole-ledger totals plus per-kind counts, as shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub totals: Totals,
    pub income_count: usize,
    pub expense_count: usize,
}

impl LedgerSummary {
    pub fn compute(transactions: &[Transaction]) -> Self {
        Self {
            totals: Totals::from_transactions(transactions),
            income_count: transactions.iter().filter(|t| t.is_income()).count(),
            expense_count: transactions.iter().filter(|t| t.is_expense()).count(),
        }
    }

    pub fn transaction_count(&self) -> usize {
        self.income_count + self.expense_count
    }
}
