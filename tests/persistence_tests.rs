use chrono::NaiveDate;
use tempfile::TempDir;
use wallet_core::ledger::{TransactionKind, Wallet};
use wallet_core::snapshot::SnapshotDocument;
use wallet_core::storage::{load_snapshot_into, read_snapshot, save_snapshot};

fn populated_wallet() -> Wallet {
    let mut wallet = Wallet::new();
    wallet
        .ledger
        .append(
            1200.0,
            "salary",
            TransactionKind::Income,
            NaiveDate::from_ymd_opt(2024, 9, 1),
        )
        .unwrap();
    wallet
        .ledger
        .append(
            85.5,
            "food",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2024, 9, 3),
        )
        .unwrap();
    wallet.budgets.set_limit("food", 300.0).unwrap();
    wallet.budgets.set_limit("books", 100.0).unwrap();
    wallet
}

#[test]
fn snapshot_roundtrip_restores_state() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("alice.json");
    let wallet = populated_wallet();
    save_snapshot(&wallet, &path).expect("save");

    let mut restored = Wallet::new();
    let report = load_snapshot_into(&mut restored, &path).expect("load");
    assert_eq!(report.imported, 2);
    assert_eq!(report.budgets_updated, 2);
    assert_eq!(restored.ledger.balance(), wallet.ledger.balance());
    assert_eq!(restored.ledger.spent("food"), 85.5);
    assert_eq!(restored.budgets.limit("books"), Some(100.0));
}

#[test]
fn reloading_into_the_same_wallet_only_skips_duplicates() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("alice.json");
    let mut wallet = populated_wallet();
    save_snapshot(&wallet, &path).expect("save");

    let report = load_snapshot_into(&mut wallet, &path).expect("reload");
    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped_duplicates, 2);
    assert_eq!(wallet.ledger.transaction_count(), 2);
}

#[test]
fn budgets_serialize_in_book_order() {
    let wallet = populated_wallet();
    let json = SnapshotDocument::from_wallet(&wallet)
        .to_pretty_json()
        .expect("render");
    let budgets = json.find("\"budgets\"").expect("budgets section present");
    let section = &json[budgets..];
    let food = section.find("\"food\"").expect("food key present");
    let books = section.find("\"books\"").expect("books key present");
    assert!(food < books, "insertion order lost:\n{json}");
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("nested").join("deep").join("wallet.json");
    save_snapshot(&populated_wallet(), &path).expect("save into nested dir");

    let raw = read_snapshot(&path).expect("read back");
    assert!(raw.contains("\"transactions\""));
}

#[test]
fn ids_survive_the_roundtrip() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("alice.json");
    let wallet = populated_wallet();
    let original_ids: Vec<String> = wallet
        .ledger
        .transactions()
        .iter()
        .map(|txn| txn.id().to_string())
        .collect();
    save_snapshot(&wallet, &path).expect("save");

    let mut restored = Wallet::new();
    load_snapshot_into(&mut restored, &path).expect("load");
    for id in original_ids {
        assert!(restored.ledger.contains_id(&id));
    }
}
