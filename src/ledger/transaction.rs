use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{WalletError, WalletResult};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Case-insensitive parse of the wire form (`INCOME`/`EXPENSE`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

/// A single dated ledger entry. Immutable once constructed; corrections are
/// new transactions, never edits.
#[derive(Debug, Clone)]
pub struct Transaction {
    id: String,
    amount: f64,
    title: String,
    kind: TransactionKind,
    date: NaiveDate,
}

impl Transaction {
    /// Validated constructor; a fresh id is generated. `date` defaults to
    /// today when omitted.
    pub fn new(
        amount: f64,
        title: &str,
        kind: TransactionKind,
        date: Option<NaiveDate>,
    ) -> WalletResult<Self> {
        Self::with_id(Uuid::new_v4().to_string(), amount, title, kind, date)
    }

    /// Constructor for records that already carry a stable identifier, such
    /// as entries re-imported from a snapshot.
    pub fn with_id(
        id: String,
        amount: f64,
        title: &str,
        kind: TransactionKind,
        date: Option<NaiveDate>,
    ) -> WalletResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(WalletError::validation(
                "amount must be a positive finite number",
            ));
        }
        let title = title.trim();
        if title.is_empty() {
            return Err(WalletError::validation("title must not be blank"));
        }
        let id = id.trim().to_string();
        let id = if id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            id
        };
        Ok(Self {
            id,
            amount,
            title: title.to_string(),
            kind,
            date: date.unwrap_or_else(today),
        })
    }

    /// Strict `YYYY-MM-DD` parse; the input is trimmed first.
    pub fn parse_date(raw: &str) -> WalletResult<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|_| WalletError::validation("invalid date format, expected YYYY-MM-DD"))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Fallback duplicate-detection key for records without a stable id.
    pub fn signature(&self) -> String {
        signature_of(self.date, self.kind, &self.title, self.amount)
    }
}

/// Identity is the id alone; two transactions with identical fields but
/// different ids are distinct.
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `date|KIND|title|amount` with the amount rounded to two decimals, so
/// near-identical amounts collapse onto the same key.
pub fn signature_of(date: NaiveDate, kind: TransactionKind, title: &str, amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    format!(
        "{}|{}|{}|{:.2}",
        date.format(DATE_FORMAT),
        kind.as_str(),
        title.trim(),
        rounded
    )
}
