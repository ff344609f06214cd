use std::collections::HashMap;

use chrono::NaiveDate;

use crate::errors::WalletResult;

use super::transaction::{Transaction, TransactionKind};

/// Append-only transaction log for one user, with a running per-category
/// expense cache.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    spent_by_category: HashMap<String, f64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a new transaction. Either the record is fully
    /// applied (log and expense cache together) or nothing changes.
    pub fn append(
        &mut self,
        amount: f64,
        title: &str,
        kind: TransactionKind,
        date: Option<NaiveDate>,
    ) -> WalletResult<&Transaction> {
        let txn = Transaction::new(amount, title, kind, date)?;
        Ok(self.insert(txn))
    }

    /// Appends an already-validated transaction, keeping the expense cache
    /// in sync.
    pub fn insert(&mut self, txn: Transaction) -> &Transaction {
        if txn.kind() == TransactionKind::Expense {
            *self
                .spent_by_category
                .entry(txn.title().to_string())
                .or_insert(0.0) += txn.amount();
        }
        let index = self.transactions.len();
        self.transactions.push(txn);
        &self.transactions[index]
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.transactions.iter().any(|txn| txn.id() == id)
    }

    /// Income minus expense over the full log.
    pub fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .map(|txn| match txn.kind() {
                TransactionKind::Income => txn.amount(),
                TransactionKind::Expense => -txn.amount(),
            })
            .sum()
    }

    pub fn sum_income(&self) -> f64 {
        self.sum_kind(TransactionKind::Income)
    }

    pub fn sum_expense(&self) -> f64 {
        self.sum_kind(TransactionKind::Expense)
    }

    fn sum_kind(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|txn| txn.kind() == kind)
            .map(|txn| txn.amount())
            .sum()
    }

    /// Per-title sums for one kind, in order of first appearance.
    pub fn totals_by_category(&self, kind: TransactionKind) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for txn in self.transactions.iter().filter(|txn| txn.kind() == kind) {
            match totals.iter_mut().find(|(title, _)| title == txn.title()) {
                Some((_, sum)) => *sum += txn.amount(),
                None => totals.push((txn.title().to_string(), txn.amount())),
            }
        }
        totals
    }

    /// Accumulated expense for a category, from the cache. Zero when the
    /// category has never seen an expense.
    pub fn spent(&self, category: &str) -> f64 {
        self.spent_by_category
            .get(category.trim())
            .copied()
            .unwrap_or(0.0)
    }

    /// Folds the accumulated expense of `old` into `new`. Historical
    /// transaction titles are left untouched.
    pub(crate) fn merge_spent(&mut self, old: &str, new: &str) -> bool {
        match self.spent_by_category.remove(old) {
            Some(moved) => {
                *self.spent_by_category.entry(new.to_string()).or_insert(0.0) += moved;
                true
            }
            None => false,
        }
    }
}
