use assert_cmd::cargo_bin;
use paydispatch::interfaces::csv::payment_reader::PaymentRecordReader;
use std::collections::HashSet;
use std::fs::File;
use std::process::Command;

mod common;

#[test]
fn test_generated_rows_are_all_dispatchable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.csv");
    common::generate_csv(&path, 300).expect("Failed to generate CSV");

    let reader = PaymentRecordReader::new(File::open(&path).unwrap());
    let requests: Vec<_> = reader
        .requests()
        .collect::<Result<_, _>>()
        .expect("Generated rows should parse");
    assert_eq!(requests.len(), 300);
}

#[test]
fn test_generated_batch_through_cli() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batch.csv");
    common::generate_csv(&path, 300).expect("Failed to generate CSV");

    let output = Command::new(cargo_bin!("paydispatch"))
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let rows: Vec<&str> = stdout.lines().skip(1).collect();
    assert_eq!(rows.len(), 300);
    assert!(rows.iter().all(|row| row.ends_with(",SUCCESS")));

    // Every payment got its own transaction id.
    let ids: HashSet<&str> = rows
        .iter()
        .filter_map(|row| row.split(',').next())
        .collect();
    assert_eq!(ids.len(), 300);
}
