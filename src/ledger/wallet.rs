use super::{budget::BudgetBook, ledger::Ledger};

/// One user's ledger paired with its budget book.
#[derive(Debug, Clone, Default)]
pub struct Wallet {
    pub ledger: Ledger,
    pub budgets: BudgetBook,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit minus accumulated spend. An unset limit counts as zero, so any
    /// spend in an unbudgeted category reads as overage.
    pub fn remaining(&self, category: &str) -> f64 {
        self.budgets.limit(category).unwrap_or(0.0) - self.ledger.spent(category)
    }

    /// Moves the budget limit (overwriting any limit already present at the
    /// new name) and folds the accumulated spend into the new category.
    /// Returns true iff either moved. Historical transaction titles are not
    /// rewritten, so category filters over old data still see the old name.
    pub fn rename_category(&mut self, old_name: &str, new_name: &str) -> bool {
        let old_name = old_name.trim();
        let new_name = new_name.trim();
        if old_name.is_empty() || new_name.is_empty() || old_name == new_name {
            return false;
        }

        let mut changed = false;
        if let Some(limit) = self.budgets.take_limit(old_name) {
            self.budgets.upsert(new_name, limit);
            changed = true;
        }
        if self.ledger.merge_spent(old_name, new_name) {
            changed = true;
        }
        changed
    }

    /// Threshold messages for every category with a positive limit, one per
    /// category, highest applicable threshold first.
    pub fn alerts(&self) -> Vec<String> {
        let mut alerts = Vec::new();
        for entry in self.budgets.entries() {
            if entry.limit <= 0.0 {
                continue;
            }
            let spent = self.ledger.spent(&entry.category);
            let used = spent / entry.limit;
            if used >= 1.0 {
                alerts.push(format!(
                    "Budget exceeded: {} by {}",
                    entry.category,
                    spent - entry.limit
                ));
            } else if used >= 0.9 {
                alerts.push(format!(
                    "Budget warning (>=90%): {} used {}%",
                    entry.category,
                    (used * 100.0).round()
                ));
            } else if used >= 0.8 {
                alerts.push(format!(
                    "Budget warning (>=80%): {} used {}%",
                    entry.category,
                    (used * 100.0).round()
                ));
            }
        }
        alerts
    }
}
