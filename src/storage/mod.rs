//! Snapshot persistence at caller-chosen locations.
//!
//! The core stays ignorant of directory layout: callers decide where the
//! snapshot bytes live, and everything here takes an explicit path.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::WalletResult;
use crate::ledger::Wallet;
use crate::snapshot::{ImportReport, ImportService, SnapshotDocument};

const TMP_SUFFIX: &str = "tmp";

/// Serializes the wallet snapshot and writes it through a temporary file,
/// creating the parent directory when missing.
pub fn save_snapshot(wallet: &Wallet, path: &Path) -> WalletResult<()> {
    let json = SnapshotDocument::from_wallet(wallet).to_pretty_json()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = tmp_path(path);
    write_all(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Raw snapshot bytes for the import engine.
pub fn read_snapshot(path: &Path) -> WalletResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Reads the snapshot at `path` and merges it into the wallet.
pub fn load_snapshot_into(wallet: &mut Wallet, path: &Path) -> WalletResult<ImportReport> {
    let raw = read_snapshot(path)?;
    ImportService::merge(wallet, &raw)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> WalletResult<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::TransactionKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn save_and_reload_roundtrip() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("wallets").join("alice.json");

        let mut wallet = Wallet::new();
        wallet
            .ledger
            .append(
                40.0,
                "food",
                TransactionKind::Expense,
                NaiveDate::from_ymd_opt(2024, 6, 1),
            )
            .unwrap();
        wallet.budgets.set_limit("food", 150.0).unwrap();
        save_snapshot(&wallet, &path).expect("save snapshot");

        let mut restored = Wallet::new();
        let report = load_snapshot_into(&mut restored, &path).expect("load snapshot");
        assert_eq!(report.imported, 1);
        assert_eq!(report.budgets_updated, 1);
        assert_eq!(restored.ledger.spent("food"), 40.0);
        assert_eq!(restored.budgets.limit("food"), Some(150.0));
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("absent.json");
        assert!(matches!(
            read_snapshot(&missing),
            Err(crate::errors::WalletError::Io(_))
        ));
    }
}
