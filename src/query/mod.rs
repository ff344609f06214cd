//! Read-only filtering and aggregation over a ledger's transaction log.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::ledger::{Ledger, Transaction, TransactionKind};

/// Optional date bounds, category set, and kind for a transaction query.
/// All fields unset means "everything".
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub categories: Vec<String>,
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn for_kind(kind: TransactionKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from,
            to,
            ..Self::default()
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Blank entries are dropped, the rest trimmed. An empty result means
    /// no category constraint.
    fn normalized_categories(&self) -> HashSet<String> {
        self.categories
            .iter()
            .map(|category| category.trim())
            .filter(|category| !category.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Pure query functions over a ledger; never mutates state.
pub struct QueryService;

impl QueryService {
    /// Both date bounds are inclusive. An inverted range (`to` before
    /// `from`) matches nothing; bound swapping is a caller-level nicety,
    /// never done here.
    pub fn filter<'a>(ledger: &'a Ledger, filter: &TransactionFilter) -> Vec<&'a Transaction> {
        let categories = filter.normalized_categories();
        let mut out: Vec<&Transaction> = ledger
            .transactions()
            .iter()
            .filter(|txn| {
                if let Some(kind) = filter.kind {
                    if txn.kind() != kind {
                        return false;
                    }
                }
                if let Some(from) = filter.from {
                    if txn.date() < from {
                        return false;
                    }
                }
                if let Some(to) = filter.to {
                    if txn.date() > to {
                        return false;
                    }
                }
                if !categories.is_empty() && !categories.contains(txn.title()) {
                    return false;
                }
                true
            })
            .collect();
        // stable sort: same-date rows keep insertion order
        out.sort_by_key(|txn| txn.date());
        out
    }

    pub fn sum(ledger: &Ledger, filter: &TransactionFilter) -> f64 {
        Self::filter(ledger, filter)
            .iter()
            .map(|txn| txn.amount())
            .sum()
    }

    /// Per-category sums over the filtered rows, keyed by trimmed title, in
    /// order of first appearance within the date-sorted result.
    pub fn group_by_category(ledger: &Ledger, filter: &TransactionFilter) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for txn in Self::filter(ledger, filter) {
            match totals.iter_mut().find(|(title, _)| title == txn.title()) {
                Some((_, sum)) => *sum += txn.amount(),
                None => totals.push((txn.title().to_string(), txn.amount())),
            }
        }
        totals
    }

    pub fn sum_income_in(
        ledger: &Ledger,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        categories: &[String],
    ) -> f64 {
        Self::sum(
            ledger,
            &TransactionFilter::between(from, to)
                .with_categories(categories.iter().cloned())
                .with_kind(TransactionKind::Income),
        )
    }

    pub fn sum_expense_in(
        ledger: &Ledger,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        categories: &[String],
    ) -> f64 {
        Self::sum(
            ledger,
            &TransactionFilter::between(from, to)
                .with_categories(categories.iter().cloned())
                .with_kind(TransactionKind::Expense),
        )
    }
}
