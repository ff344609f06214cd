//! Budget bookkeeping operations over one wallet.

use tracing::debug;

use crate::errors::WalletResult;
use crate::ledger::Wallet;

pub struct BudgetService;

impl BudgetService {
    pub fn set_limit(wallet: &mut Wallet, category: &str, limit: f64) -> WalletResult<()> {
        wallet.budgets.set_limit(category, limit)?;
        debug!(category, limit, "budget limit set");
        Ok(())
    }

    /// Overwrites only an existing limit; false when the category has none.
    pub fn update_limit(wallet: &mut Wallet, category: &str, limit: f64) -> WalletResult<bool> {
        wallet.budgets.update_limit(category, limit)
    }

    pub fn remove_limit(wallet: &mut Wallet, category: &str) -> bool {
        wallet.budgets.remove_limit(category)
    }

    pub fn rename_category(wallet: &mut Wallet, old_name: &str, new_name: &str) -> bool {
        let changed = wallet.rename_category(old_name, new_name);
        if changed {
            debug!(old_name, new_name, "budget category renamed");
        }
        changed
    }

    pub fn remaining(wallet: &Wallet, category: &str) -> f64 {
        wallet.remaining(category)
    }

    pub fn alerts(wallet: &Wallet) -> Vec<String> {
        wallet.alerts()
    }
}
