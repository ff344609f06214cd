use crate::errors::{WalletError, WalletResult};

/// One category ceiling. A limit may exist for a category with no
/// transactions yet (budget set in advance).
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLimit {
    pub category: String,
    pub limit: f64,
}

/// Category -> limit mapping; insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct BudgetBook {
    limits: Vec<BudgetLimit>,
}

impl BudgetBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or overwrites a category limit. The category is trimmed; the
    /// limit must be a finite non-negative number.
    pub fn set_limit(&mut self, category: &str, limit: f64) -> WalletResult<()> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(WalletError::validation(
                "budget limit must be a non-negative finite number",
            ));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(WalletError::validation("budget category must not be blank"));
        }
        self.upsert(category, limit);
        Ok(())
    }

    /// Overwrites the limit only when the category already has one; returns
    /// whether it did.
    pub fn update_limit(&mut self, category: &str, limit: f64) -> WalletResult<bool> {
        if self.limit(category).is_none() {
            return Ok(false);
        }
        self.set_limit(category, limit)?;
        Ok(true)
    }

    pub fn limit(&self, category: &str) -> Option<f64> {
        let category = category.trim();
        self.limits
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.limit)
    }

    /// True iff a limit existed and was removed.
    pub fn remove_limit(&mut self, category: &str) -> bool {
        let category = category.trim();
        let before = self.limits.len();
        self.limits.retain(|entry| entry.category != category);
        self.limits.len() != before
    }

    /// Categories with a configured limit, in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.limits.iter().map(|entry| entry.category.as_str())
    }

    pub fn entries(&self) -> &[BudgetLimit] {
        &self.limits
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Removes and returns the limit for a category, if any.
    pub(crate) fn take_limit(&mut self, category: &str) -> Option<f64> {
        let index = self
            .limits
            .iter()
            .position(|entry| entry.category == category)?;
        Some(self.limits.remove(index).limit)
    }

    pub(crate) fn upsert(&mut self, category: &str, limit: f64) {
        match self
            .limits
            .iter_mut()
            .find(|entry| entry.category == category)
        {
            Some(entry) => entry.limit = limit,
            None => self.limits.push(BudgetLimit {
                category: category.to_string(),
                limit,
            }),
        }
    }
}
