use wallet_core::errors::WalletError;
use wallet_core::ledger::{TransactionKind, Wallet};
use wallet_core::snapshot::ImportService;

const WELL_FORMED: &str = r#"{
    "transactions": [
        { "id": "t-1", "date": "2024-08-01", "type": "INCOME", "title": "salary", "amount": 1500.0 },
        { "id": "t-2", "date": "2024-08-02", "type": "EXPENSE", "title": "food", "amount": 60.0 },
        { "date": "2024-08-03", "type": "EXPENSE", "title": "books", "amount": 25.0 }
    ],
    "budgets": { "food": 200.0, "books": 80.0 }
}"#;

#[test]
fn re_import_is_idempotent() {
    let mut wallet = Wallet::new();

    let first = ImportService::merge(&mut wallet, WELL_FORMED).unwrap();
    assert_eq!(first.imported, 3);
    assert_eq!(first.skipped_duplicates, 0);
    assert_eq!(first.budgets_updated, 2);

    let second = ImportService::merge(&mut wallet, WELL_FORMED).unwrap();
    assert_eq!(second.imported, 0);
    assert_eq!(second.skipped_duplicates, 3);
    assert_eq!(second.budgets_updated, 2);
    assert_eq!(wallet.ledger.transaction_count(), 3);
}

#[test]
fn known_id_is_skipped_even_with_different_fields() {
    let mut wallet = Wallet::new();
    ImportService::merge(&mut wallet, WELL_FORMED).unwrap();

    let edited = r#"{
        "transactions": [
            { "id": "t-2", "date": "2030-01-01", "type": "INCOME", "title": "rewritten", "amount": 9.99 }
        ]
    }"#;
    let report = ImportService::merge(&mut wallet, edited).unwrap();
    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped_duplicates, 1);
}

#[test]
fn in_batch_duplicates_without_id_are_caught() {
    let mut wallet = Wallet::new();
    let raw = r#"{
        "transactions": [
            { "date": "2024-08-05", "type": "EXPENSE", "title": "cafe", "amount": 12.0 },
            { "date": "2024-08-05", "type": "EXPENSE", "title": "cafe", "amount": 12.0 }
        ]
    }"#;
    let report = ImportService::merge(&mut wallet, raw).unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped_duplicates, 1);
}

#[test]
fn signature_rounding_collapses_near_equal_amounts() {
    let mut wallet = Wallet::new();
    let raw = r#"{
        "transactions": [
            { "date": "2024-08-05", "type": "EXPENSE", "title": "cafe", "amount": 49.995 },
            { "date": "2024-08-05", "type": "EXPENSE", "title": "cafe", "amount": 50.004 }
        ]
    }"#;
    let report = ImportService::merge(&mut wallet, raw).unwrap();
    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped_duplicates, 1);
}

#[test]
fn signatures_are_seeded_from_the_live_ledger() {
    let mut wallet = Wallet::new();
    wallet
        .ledger
        .append(
            12.0,
            "cafe",
            TransactionKind::Expense,
            chrono::NaiveDate::from_ymd_opt(2024, 8, 5),
        )
        .unwrap();

    let raw = r#"{
        "transactions": [
            { "date": "2024-08-05", "type": "EXPENSE", "title": "cafe", "amount": 12.0 }
        ]
    }"#;
    let report = ImportService::merge(&mut wallet, raw).unwrap();
    assert_eq!(report.imported, 0);
    assert_eq!(report.skipped_duplicates, 1);
}

#[test]
fn budget_entries_with_bad_values_are_skipped() {
    let mut wallet = Wallet::new();
    let raw = r#"{
        "budgets": { "food": 200.0, "bad": -5.0, "worse": "a lot", "books": 80.0 }
    }"#;
    let report = ImportService::merge(&mut wallet, raw).unwrap();
    assert_eq!(report.budgets_updated, 2);
    assert_eq!(wallet.budgets.limit("food"), Some(200.0));
    assert_eq!(wallet.budgets.limit("books"), Some(80.0));
    assert_eq!(wallet.budgets.limit("bad"), None);
}

#[test]
fn malformed_snapshot_aborts_without_merging() {
    let mut wallet = Wallet::new();
    // missing colon after the field key
    let raw = r#"{ "transactions" [ { "type": "INCOME", "title": "x", "amount": 1.0 } ] }"#;
    let err = ImportService::merge(&mut wallet, raw).expect_err("syntax error must abort");
    match err {
        WalletError::MalformedSnapshot { location } => {
            assert!(location.contains("line"), "location was: {location}");
            assert!(location.contains("column"), "location was: {location}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(wallet.ledger.transaction_count(), 0);
    assert!(wallet.budgets.is_empty());
}

#[test]
fn case_insensitive_type_and_legacy_date_field() {
    let mut wallet = Wallet::new();
    let raw = r#"{
        "transactions": [
            { "type": "income", "title": "bonus", "amount": 100.0, "dateIso": "2024-08-09" }
        ]
    }"#;
    let report = ImportService::merge(&mut wallet, raw).unwrap();
    assert_eq!(report.imported, 1);
    let txn = &wallet.ledger.transactions()[0];
    assert_eq!(txn.kind(), TransactionKind::Income);
    assert_eq!(
        txn.date(),
        chrono::NaiveDate::from_ymd_opt(2024, 8, 9).unwrap()
    );
}
