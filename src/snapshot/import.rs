//! Merges an externally edited snapshot into a live wallet.
//!
//! Structural parse failures abort the whole merge before anything is
//! touched; defects in individual records or budget entries skip only that
//! entry.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::errors::{WalletError, WalletResult};
use crate::ledger::transaction::{self, signature_of, Transaction, TransactionKind};
use crate::ledger::Wallet;

/// Counters reported back to the caller after a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped_duplicates: usize,
    pub budgets_updated: usize,
}

impl ImportReport {
    pub fn summary(&self) -> String {
        format!(
            "transactions: +{}, duplicates skipped: {}, budgets updated: {}",
            self.imported, self.skipped_duplicates, self.budgets_updated
        )
    }
}

pub struct ImportService;

impl ImportService {
    /// Parses `raw` and merges the surviving records into the wallet.
    pub fn merge(wallet: &mut Wallet, raw: &str) -> WalletResult<ImportReport> {
        let root: Value =
            serde_json::from_str(raw).map_err(|err| WalletError::malformed_snapshot(&err))?;

        let mut report = ImportReport::default();
        let Value::Object(doc) = root else {
            // well-formed but not a snapshot object: nothing to merge
            return Ok(report);
        };

        // seed both duplicate indexes from the live ledger so in-batch
        // repeats are caught alongside pre-existing records
        let mut seen_ids: HashSet<String> = wallet
            .ledger
            .transactions()
            .iter()
            .map(|txn| txn.id().to_string())
            .collect();
        let mut seen_signatures: HashSet<String> = wallet
            .ledger
            .transactions()
            .iter()
            .map(Transaction::signature)
            .collect();

        if let Some(Value::Array(entries)) = doc.get("transactions") {
            for entry in entries {
                let Some(record) = parse_record(entry) else {
                    continue;
                };
                let signature =
                    signature_of(record.date, record.kind, &record.title, record.amount);
                match &record.id {
                    Some(id) if seen_ids.contains(id) => {
                        report.skipped_duplicates += 1;
                        continue;
                    }
                    None if seen_signatures.contains(&signature) => {
                        report.skipped_duplicates += 1;
                        continue;
                    }
                    _ => {}
                }

                let created = match record.id {
                    Some(id) => Transaction::with_id(
                        id,
                        record.amount,
                        &record.title,
                        record.kind,
                        Some(record.date),
                    ),
                    None => Transaction::new(
                        record.amount,
                        &record.title,
                        record.kind,
                        Some(record.date),
                    ),
                };
                let Ok(txn) = created else {
                    continue;
                };
                seen_ids.insert(txn.id().to_string());
                seen_signatures.insert(signature);
                wallet.ledger.insert(txn);
                report.imported += 1;
            }
        }

        if let Some(Value::Object(budgets)) = doc.get("budgets") {
            for (category, value) in budgets {
                let Some(limit) = value.as_f64() else {
                    continue;
                };
                if !limit.is_finite() || limit < 0.0 {
                    continue;
                }
                if wallet.budgets.set_limit(category, limit).is_ok() {
                    report.budgets_updated += 1;
                } else {
                    debug!(category = %category, "budget entry skipped");
                }
            }
        }

        info!("snapshot merged | {}", report.summary());
        Ok(report)
    }
}

struct ParsedRecord {
    id: Option<String>,
    date: NaiveDate,
    kind: TransactionKind,
    title: String,
    amount: f64,
}

/// Reads one transaction entry. Returns None for any record-level defect:
/// non-object entry, missing/unparseable type, blank title, bad amount, or
/// a date that is present but does not parse.
fn parse_record(entry: &Value) -> Option<ParsedRecord> {
    let obj = entry.as_object()?;
    let kind = TransactionKind::parse(&string_field(obj, "type")?)?;
    let title = string_field(obj, "title")?;
    let amount = number_field(obj, "amount")?;
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    let date = match string_field(obj, "date").or_else(|| string_field(obj, "dateIso")) {
        Some(raw) => Transaction::parse_date(&raw).ok()?,
        None => transaction::today(),
    };
    let id = string_field(obj, "id");
    Some(ParsedRecord {
        id,
        date,
        kind,
        title,
        amount,
    })
}

/// Trimmed string field; absent, non-string, or blank reads as None.
fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let raw = obj.get(key)?.as_str()?.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Numeric field; externally edited files sometimes quote their amounts.
fn number_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(number) => number.as_f64(),
        Value::String(raw) => raw.trim().parse().ok(),
        _ => None,
    }
}
