use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_mavfast_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("mavfast")
}

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("quote"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Start the REST API server"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--host"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_config_redacts_password() {
    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("config")
        .arg("--format")
        .arg("json")
        .env("PORT", "7001")
        .env("HOST", "127.0.0.1")
        .env("PASSWORD", "s3cret-value")
        .env("COMPANY_ID", "n42");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:7001"))
        .stdout(predicate::str::contains("n42"))
        .stdout(predicate::str::contains("\"password_set\": true"))
        .stdout(predicate::str::contains("s3cret-value").not());
}

#[test]
fn test_invalid_port_is_reported() {
    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("config").env("PORT", "not-a-port");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid PORT"));
}

#[test]
fn test_serve_rejects_bad_port_flag() {
    let mut cmd = Command::new(get_mavfast_bin());
    cmd.arg("serve").arg("--port").arg("99999");

    cmd.assert().failure();
}
