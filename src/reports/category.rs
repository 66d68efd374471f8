//! Per-category report
//!
//! One row per business line, across the whole transaction set.

use serde::Serialize;

use super::aggregate::{aggregate_category, Totals};
use crate::models::{Category, Transaction};

/// Totals for a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub totals: Totals,
    pub transaction_count: usize,
}

/// One row per category, in `Category::ALL` order
pub fn category_reports(transactions: &[Transaction]) -> Vec<CategoryReport> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryReport {
            category,
            totals: aggregate_category(transactions, category),
            transaction_count: transactions
                .iter()
                .filter(|t| t.category == category)
                .count(),
        })
        .collect()
}
