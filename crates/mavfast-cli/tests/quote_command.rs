use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_mavfast_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("mavfast")
}

fn quote_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_price_quote_file_single_part() {
    let file = quote_file(
        r#"{"quote_data": {"quote_id": "MF-1", "parts_requested": [{"part_number": "455432", "quantity": 225}]}}"#,
    );

    let (quote_id, summary) = mavfast_cli::commands::quote::price_quote_file(file.path()).unwrap();

    assert_eq!(quote_id, "MF-1");
    assert_eq!(summary.parts_processed, 1);
    assert!((summary.total_material_cost - 124.4025).abs() < 1e-9);
    assert_eq!(summary.total_freight, 0.0);
    assert!((summary.total_quote_value - 124.4025).abs() < 1e-9);
}

#[test]
fn test_quote_command_json_output() {
    let file = quote_file(
        r#"{"quote_id": "MF-2", "parts_requested": [{"part_number": "1", "quantity": 2}, {"part_number": "2", "quantity": 3}]}"#,
    );

    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("quote").arg(file.path()).arg("--format").arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(json["quote_id"], "MF-2");
    assert_eq!(json["parts_processed"], 2);
    assert_eq!(json["dallas_items"], 2);
    assert_eq!(json["dallas_percentage"], 100.0);
}

#[test]
fn test_quote_command_pretty_output() {
    let file = quote_file(
        r#"{"quote_id": "MF-3", "parts_requested": [{"part_number": "455432", "quantity": 225}]}"#,
    );

    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("quote").arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Quote MF-3"))
        .stdout(predicate::str::contains("455432"))
        .stdout(predicate::str::contains("124.4025"));
}

#[test]
fn test_quote_command_empty_parts_fails() {
    let file = quote_file(r#"{"quote_id": "MF-4", "parts_requested": []}"#);

    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("quote").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No parts provided"));
}

#[test]
fn test_quote_command_missing_file() {
    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("quote").arg("/nonexistent/quote.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read quote file"));
}
