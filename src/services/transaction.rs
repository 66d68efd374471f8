//! Transaction service
//!
//! Business logic for the ledger's mutations: add, edit, delete and clear.
//! Every mutation is followed by a best-effort save; a failed save is logged
//! and the in-memory ledger stays authoritative.

use chrono::{NaiveDate, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, Transaction, TransactionId, TransactionKind};
use crate::reports::LedgerSummary;
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<Category>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Keep only the most recent N matches
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.category.map_or(true, |c| txn.category == c)
            && self.start_date.map_or(true, |s| txn.date >= s)
            && self.end_date.map_or(true, |e| txn.date <= e)
    }
}

/// Input for creating a new transaction
///
/// `amount` is optional because that is how the entry form arrives; a missing
/// amount is refused before anything is created.
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionKind,
    pub amount: Option<Money>,
    pub category: Category,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Field overrides for an edit; anything left `None` keeps its current value
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

fn check_amount(amount: Money) -> LedgerResult<Money> {
    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(LedgerError::Validation(format!(
            "Amount {} exceeds the limit of {}",
            amount,
            Money::MAX_AMOUNT
        )));
    }
    Ok(amount)
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    fn persist(&self) {
        if let Err(e) = self.storage.transactions.save() {
            tracing::error!(error = %e, "Failed to save transactions");
        }
    }

    /// Create a new transaction
    pub fn create(&mut self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        let amount = input
            .amount
            .ok_or_else(|| LedgerError::Validation("Amount is required".into()))?;
        let amount = check_amount(amount)?;

        let latest = self.storage.transactions.latest_id();
        let id = TransactionId::issue(Utc::now().timestamp_millis(), latest).ok_or_else(|| {
            LedgerError::Storage("No transaction ids left after the largest stored id".into())
        })?;

        let mut txn = Transaction::new(id, input.kind, amount, input.category, input.date);
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }

        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.transactions.insert(txn.clone());
        tracing::info!(id = %txn.id, kind = ?txn.kind, amount = txn.amount.rupiah(), "Transaction added");
        self.persist();

        Ok(txn)
    }

    /// Edit a transaction
    ///
    /// The whole record is replaced with the merged fields; `id` and the
    /// income/expense type never change.
    pub fn update(
        &mut self,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> LedgerResult<Transaction> {
        let current = self
            .storage
            .transactions
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        let amount = match input.amount {
            Some(amount) => check_amount(amount)?,
            None => current.amount,
        };

        let updated = Transaction {
            id: current.id,
            kind: current.kind,
            amount,
            category: input.category.unwrap_or(current.category),
            date: input.date.unwrap_or(current.date),
            description: input
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or(current.description),
        };

        self.storage.transactions.replace(updated.clone());
        tracing::info!(id = %id, "Transaction updated");
        self.persist();

        Ok(updated)
    }

    /// Delete a transaction
    pub fn delete(&mut self, id: TransactionId) -> LedgerResult<Transaction> {
        let removed = self
            .storage
            .transactions
            .remove(id)
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        tracing::info!(id = %id, "Transaction deleted");
        self.persist();
        Ok(removed)
    }

    /// Delete every transaction, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.storage.transactions.clear();
        tracing::info!(removed, "All transactions cleared");
        self.persist();
        removed
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Transaction> {
        self.storage
            .transactions
            .get(id)
            .cloned()
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))
    }

    /// List transactions matching a filter, in stored order
    pub fn list(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        let matching: Vec<Transaction> = self
            .storage
            .transactions
            .all()
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();

        match filter.limit {
            Some(limit) if matching.len() > limit => matching[matching.len() - limit..].to_vec(),
            _ => matching,
        }
    }

    /// Dashboard totals
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::compute(self.storage.transactions.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use std::collections::HashSet;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(kind: TransactionKind, amount: i64, category: Category) -> CreateTransactionInput {
        CreateTransactionInput {
            kind,
            amount: Some(Money::from_rupiah(amount)),
            category,
            date: date(2024, 3, 1),
            description: None,
        }
    }

    #[test]
    fn test_create_and_summary() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        service
            .create(input(TransactionKind::Income, 100_000, Category::Gas))
            .unwrap();
        service
            .create(input(TransactionKind::Expense, 30_000, Category::Gas))
            .unwrap();

        let summary = service.summary();
        assert_eq!(summary.totals.income, Money::from_rupiah(100_000));
        assert_eq!(summary.totals.expense, Money::from_rupiah(30_000));
        assert_eq!(summary.totals.profit, Money::from_rupiah(70_000));
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.expense_count, 1);
    }

    #[test]
    fn test_create_without_amount_is_refused() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let mut missing = input(TransactionKind::Income, 0, Category::Gas);
        missing.amount = None;
        let err = service.create(missing).unwrap_err();
        assert!(err.is_validation());
        assert!(service.list(&TransactionFilter::new()).is_empty());
    }

    #[test]
    fn test_create_negative_amount_is_refused() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let err = service
            .create(input(TransactionKind::Expense, -5, Category::Gas))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_amount_above_limit_is_refused() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let mut huge = input(TransactionKind::Income, 0, Category::Gas);
        huge.amount = Some(Money::parse("9000000000000000000").unwrap());
        assert!(service.create(huge.clone()).unwrap_err().is_validation());
        assert!(service.create(huge).unwrap_err().is_validation());

        let at_limit = service
            .create(input(TransactionKind::Income, Money::MAX_AMOUNT.rupiah(), Category::Gas))
            .unwrap();
        assert!(service
            .update(
                at_limit.id,
                UpdateTransactionInput {
                    amount: Some(Money::from_rupiah(Money::MAX_AMOUNT.rupiah() + 1)),
                    ..Default::default()
                },
            )
            .unwrap_err()
            .is_validation());
        assert_eq!(service.summary().totals.income, Money::MAX_AMOUNT);
    }

    #[test]
    fn test_summary_of_oversized_stored_amounts_saturates() {
        let (_temp_dir, mut storage) = create_test_storage();
        for raw in 1..=2 {
            storage.transactions.insert(Transaction::new(
                TransactionId::from_raw(raw),
                TransactionKind::Income,
                Money::from_rupiah(9_000_000_000_000_000_000),
                Category::Gas,
                date(2024, 3, 1),
            ));
        }

        let service = TransactionService::new(&mut storage);
        let summary = service.summary();
        assert_eq!(summary.totals.income, Money::from_rupiah(i64::MAX));
        assert_eq!(summary.totals.profit, Money::from_rupiah(i64::MAX));
    }

    #[test]
    fn test_create_when_ids_exhausted() {
        let (_temp_dir, mut storage) = create_test_storage();
        storage.transactions.insert(Transaction::new(
            TransactionId::from_raw(i64::MAX),
            TransactionKind::Income,
            Money::from_rupiah(1_000),
            Category::Gas,
            date(2024, 3, 1),
        ));

        let mut service = TransactionService::new(&mut storage);
        let err = service
            .create(input(TransactionKind::Income, 1_000, Category::Gas))
            .unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert_eq!(service.list(&TransactionFilter::new()).len(), 1);
    }

    #[test]
    fn test_ids_unique_across_rapid_creates() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let ids: Vec<_> = (0..50)
            .map(|_| {
                service
                    .create(input(TransactionKind::Income, 1_000, Category::Gas))
                    .unwrap()
                    .id
            })
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_create_persists() {
        let (temp_dir, mut storage) = create_test_storage();
        {
            let mut service = TransactionService::new(&mut storage);
            service
                .create(input(TransactionKind::Income, 2_500, Category::EsKrimMainan))
                .unwrap();
        }

        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all();
        assert_eq!(reloaded.transactions.len(), 1);
        assert_eq!(
            reloaded.transactions.all()[0].category,
            Category::EsKrimMainan
        );
    }

    #[test]
    fn test_update_keeps_id_and_kind() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let original = service
            .create(input(TransactionKind::Expense, 30_000, Category::Gas))
            .unwrap();

        let updated = service
            .update(
                original.id,
                UpdateTransactionInput {
                    amount: Some(Money::from_rupiah(45_000)),
                    category: Some(Category::EsKrimMainan),
                    date: Some(date(2024, 3, 2)),
                    description: Some("  stok baru ".into()),
                },
            )
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.kind, TransactionKind::Expense);
        assert_eq!(updated.amount, Money::from_rupiah(45_000));
        assert_eq!(updated.category, Category::EsKrimMainan);
        assert_eq!(updated.date, date(2024, 3, 2));
        assert_eq!(updated.description, "stok baru");
        assert_eq!(service.get(original.id).unwrap(), updated);
    }

    #[test]
    fn test_update_without_changes_keeps_fields() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let mut with_note = input(TransactionKind::Income, 10_000, Category::Gas);
        with_note.description = Some("tabung 3kg".into());
        let original = service.create(with_note).unwrap();

        let updated = service
            .update(original.id, UpdateTransactionInput::default())
            .unwrap();
        assert_eq!(updated, original);
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);
        let missing = TransactionId::from_raw(42);

        assert!(service
            .update(missing, UpdateTransactionInput::default())
            .unwrap_err()
            .is_not_found());
        assert!(service.delete(missing).unwrap_err().is_not_found());
        assert!(service.get(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_and_clear() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        let first = service
            .create(input(TransactionKind::Income, 1_000, Category::Gas))
            .unwrap();
        service
            .create(input(TransactionKind::Income, 2_000, Category::Gas))
            .unwrap();
        service
            .create(input(TransactionKind::Expense, 3_000, Category::Gas))
            .unwrap();

        service.delete(first.id).unwrap();
        assert_eq!(service.list(&TransactionFilter::new()).len(), 2);

        assert_eq!(service.clear(), 2);
        assert_eq!(service.summary(), LedgerSummary::default());
    }

    #[test]
    fn test_list_filters() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = TransactionService::new(&mut storage);

        service
            .create(input(TransactionKind::Income, 1_000, Category::Gas))
            .unwrap();
        service
            .create(input(TransactionKind::Expense, 2_000, Category::EsKrimMainan))
            .unwrap();
        let mut later = input(TransactionKind::Income, 3_000, Category::EsKrimMainan);
        later.date = date(2024, 4, 1);
        service.create(later).unwrap();

        let incomes = service.list(&TransactionFilter::new().kind(TransactionKind::Income));
        assert_eq!(incomes.len(), 2);

        let es_krim = service.list(&TransactionFilter::new().category(Category::EsKrimMainan));
        assert_eq!(es_krim.len(), 2);

        let march = service.list(
            &TransactionFilter::new().date_range(date(2024, 3, 1), date(2024, 3, 31)),
        );
        assert_eq!(march.len(), 2);

        let last = service.list(&TransactionFilter::new().limit(1));
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].amount, Money::from_rupiah(3_000));
    }
}
