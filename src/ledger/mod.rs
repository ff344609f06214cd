//! Wallet domain models: transactions, the append-only ledger log, and
//! per-category budget state.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;
pub mod wallet;

pub use budget::{BudgetBook, BudgetLimit};
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionKind};
pub use wallet::Wallet;
