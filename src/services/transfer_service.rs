//! Moves money between two wallets as one logical operation.

use tracing::info;

use crate::directory::WalletDirectory;
use crate::errors::{WalletError, WalletResult};
use crate::ledger::{Transaction, TransactionKind};

/// Record of a committed transfer: the paired transaction ids plus the
/// normalized participants.
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    pub sender: String,
    pub receiver: String,
    pub amount: f64,
    pub outgoing_id: String,
    pub incoming_id: String,
}

pub struct TransferService;

impl TransferService {
    /// Validates everything before touching either ledger, in order: blank
    /// participant, self-transfer, bad amount, unknown sender, unknown
    /// receiver. After validation the paired appends cannot fail, so a
    /// committed transfer is always complete on both sides.
    pub fn transfer(
        directory: &mut WalletDirectory,
        sender: &str,
        receiver: &str,
        amount: f64,
        memo: Option<&str>,
    ) -> WalletResult<TransferReceipt> {
        let sender_id = WalletDirectory::normalize_id(sender);
        let receiver_id = WalletDirectory::normalize_id(receiver);
        if sender_id.is_empty() || receiver_id.is_empty() {
            return Err(WalletError::validation(
                "transfer participants must be named",
            ));
        }
        if sender_id == receiver_id {
            return Err(WalletError::validation("cannot transfer money to self"));
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(WalletError::validation(
                "amount must be a positive finite number",
            ));
        }
        if !directory.contains(&sender_id) {
            return Err(WalletError::validation(format!(
                "sender not found: {sender_id}"
            )));
        }
        if !directory.contains(&receiver_id) {
            return Err(WalletError::validation(format!(
                "recipient not found: {receiver_id}"
            )));
        }

        let outgoing = Transaction::new(
            amount,
            &transfer_title("transfer to", &receiver_id, memo),
            TransactionKind::Expense,
            None,
        )?;
        let incoming = Transaction::new(
            amount,
            &transfer_title("transfer from", &sender_id, memo),
            TransactionKind::Income,
            None,
        )?;
        let receipt = TransferReceipt {
            sender: sender_id.clone(),
            receiver: receiver_id.clone(),
            amount,
            outgoing_id: outgoing.id().to_string(),
            incoming_id: incoming.id().to_string(),
        };

        // both participants were verified above, so these lookups hold
        directory
            .wallet_mut(&sender_id)
            .ok_or_else(|| WalletError::validation(format!("sender not found: {sender_id}")))?
            .ledger
            .insert(outgoing);
        directory
            .wallet_mut(&receiver_id)
            .ok_or_else(|| WalletError::validation(format!("recipient not found: {receiver_id}")))?
            .ledger
            .insert(incoming);

        info!(
            sender = %receipt.sender,
            receiver = %receipt.receiver,
            amount,
            "transfer committed"
        );
        Ok(receipt)
    }
}

fn transfer_title(prefix: &str, counterparty: &str, memo: Option<&str>) -> String {
    match memo.map(str::trim).filter(|memo| !memo.is_empty()) {
        Some(memo) => format!("{prefix} {counterparty} | {memo}"),
        None => format!("{prefix} {counterparty}"),
    }
}
