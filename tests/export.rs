use prodo::api::money::{Transaction, TransactionKind};
use prodo::api::pomodoro::StatsSnapshot;
use prodo::libs::export::{ExportFormat, Exporter};
use std::fs;

fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "t1".to_string(),
            kind: TransactionKind::Income,
            amount: 2500.0,
            category: "Salary".to_string(),
            description: "August".to_string(),
            date: "2025-08-01".to_string(),
        },
        Transaction {
            id: "t2".to_string(),
            kind: TransactionKind::Expense,
            amount: 42.5,
            category: "Groceries".to_string(),
            description: String::new(),
            date: "2025-08-02".to_string(),
        },
    ]
}

fn sample_stats() -> StatsSnapshot {
    serde_json::from_value(serde_json::json!({
        "today": 3,
        "totalPomodoros": 42,
        "totalWorkTime": 1050
    }))
    .unwrap()
}

#[test]
fn test_transactions_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.csv");

    Exporter::new(ExportFormat::Csv, Some(path.clone()))
        .export_transactions(&sample_transactions())
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("ID,Date,Type,Category,Description,Amount"));
    assert!(content.contains("t1,2025-08-01,income,Salary,August,2500.00"));
    assert!(content.contains("t2,2025-08-02,expense,Groceries,,42.50"));
}

#[test]
fn test_transactions_json_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.json");

    Exporter::new(ExportFormat::Json, Some(path.clone()))
        .export_transactions(&sample_transactions())
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["kind"], "income");
    assert_eq!(rows[1]["amount"], 42.5);
}

#[test]
fn test_transactions_excel_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transactions.xlsx");

    Exporter::new(ExportFormat::Excel, Some(path.clone()))
        .export_transactions(&sample_transactions())
        .unwrap();

    // XLSX is a zip archive
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_stats_export_all_formats() {
    let dir = tempfile::tempdir().unwrap();
    let stats = sample_stats();

    let csv_path = dir.path().join("stats.csv");
    Exporter::new(ExportFormat::Csv, Some(csv_path.clone())).export_stats(&stats).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.contains("3,42,1050"));

    let json_path = dir.path().join("stats.json");
    Exporter::new(ExportFormat::Json, Some(json_path.clone())).export_stats(&stats).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed["total_pomodoros"], 42);

    let xlsx_path = dir.path().join("stats.xlsx");
    Exporter::new(ExportFormat::Excel, Some(xlsx_path.clone())).export_stats(&stats).unwrap();
    assert!(fs::read(&xlsx_path).unwrap().starts_with(b"PK"));
}
