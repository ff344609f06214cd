//! Validated append helpers for a wallet's ledger.

use chrono::NaiveDate;
use tracing::debug;

use crate::errors::WalletResult;
use crate::ledger::{Transaction, TransactionKind, Wallet};

pub struct TransactionService;

impl TransactionService {
    pub fn add_income(
        wallet: &mut Wallet,
        amount: f64,
        title: &str,
        date: Option<NaiveDate>,
    ) -> WalletResult<Transaction> {
        Self::add(wallet, amount, title, TransactionKind::Income, date)
    }

    pub fn add_expense(
        wallet: &mut Wallet,
        amount: f64,
        title: &str,
        date: Option<NaiveDate>,
    ) -> WalletResult<Transaction> {
        Self::add(wallet, amount, title, TransactionKind::Expense, date)
    }

    /// Appends through the validated constructor and returns the created
    /// record.
    pub fn add(
        wallet: &mut Wallet,
        amount: f64,
        title: &str,
        kind: TransactionKind,
        date: Option<NaiveDate>,
    ) -> WalletResult<Transaction> {
        let txn = wallet.ledger.append(amount, title, kind, date)?.clone();
        debug!(id = %txn.id(), kind = txn.kind().as_str(), amount, "transaction appended");
        Ok(txn)
    }
}
