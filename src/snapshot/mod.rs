//! External snapshot document: the wire format shared by export and import.

pub mod import;

pub use import::{ImportReport, ImportService};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::errors::WalletResult;
use crate::ledger::transaction::DATE_FORMAT;
use crate::ledger::{Transaction, TransactionKind, Wallet};

/// Document form of one wallet:
/// `{ "transactions": [...], "budgets": {...} }`.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotDocument {
    pub transactions: Vec<TransactionRecord>,
    #[serde(serialize_with = "serialize_budgets")]
    pub budgets: Vec<(String, f64)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRecord {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub title: String,
    pub amount: f64,
}

impl SnapshotDocument {
    pub fn from_wallet(wallet: &Wallet) -> Self {
        Self {
            transactions: wallet
                .ledger
                .transactions()
                .iter()
                .map(TransactionRecord::from_transaction)
                .collect(),
            budgets: wallet
                .budgets
                .entries()
                .iter()
                .map(|entry| (entry.category.clone(), entry.limit))
                .collect(),
        }
    }

    /// Pretty-printed byte form handed to the storage collaborator.
    pub fn to_pretty_json(&self) -> WalletResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl TransactionRecord {
    fn from_transaction(txn: &Transaction) -> Self {
        Self {
            id: txn.id().to_string(),
            date: txn.date().format(DATE_FORMAT).to_string(),
            kind: txn.kind(),
            title: txn.title().to_string(),
            amount: txn.amount(),
        }
    }
}

/// Budgets keep their book insertion order on the wire.
fn serialize_budgets<S>(budgets: &[(String, f64)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(budgets.len()))?;
    for (category, limit) in budgets {
        map.serialize_entry(category, limit)?;
    }
    map.end()
}
