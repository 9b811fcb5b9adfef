mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::write_history;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let csv = write_history(&[
        "p1, AUTHORIZE, PENDING, 2023-01-01T00:00:00Z",
        "p2, PURCHASE, PENDING, 2023-01-09T00:00:00Z",
        "p3, AUTHORIZE, PENDING, 2023-01-01T00:00:00Z",
        "p3, CAPTURE, PROCESSED, 2023-01-02T00:00:00Z",
        "p4, PURCHASE, PENDING,",
    ]);

    let mut cmd = Command::new(cargo_bin!("pending-expiry"));
    cmd.arg(csv.path())
        .arg("--expiration-days")
        .arg("5")
        .arg("--now")
        .arg("2023-01-10T00:00:00Z");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "payment,expired,latest_status,expiration_date",
        ))
        .stdout(predicate::str::contains("p1,true,PENDING,2023-01-06T00:00:00+00:00"))
        .stdout(predicate::str::contains("p2,false,PENDING,2023-01-14T00:00:00+00:00"))
        .stdout(predicate::str::contains("p3,false,PROCESSED,\n"))
        .stdout(predicate::str::contains("p4,false,PENDING,"));

    Ok(())
}

#[test]
fn test_cli_boundary_is_not_expired() {
    let csv = write_history(&["p1, AUTHORIZE, PENDING, 2023-01-01T00:00:00Z"]);

    let mut cmd = Command::new(cargo_bin!("pending-expiry"));
    cmd.arg(csv.path())
        .args(["--expiration-days", "5", "--now", "2023-01-06T00:00:00Z"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("p1,false,PENDING"));

    let mut cmd = Command::new(cargo_bin!("pending-expiry"));
    cmd.arg(csv.path())
        .args(["--expiration-days", "5", "--now", "2023-01-06T00:00:01Z"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("p1,true,PENDING"));
}

#[test]
fn test_cli_json_output() {
    let csv = write_history(&["p1, PURCHASE, PENDING, 2023-01-01T00:00:00Z"]);

    let mut cmd = Command::new(cargo_bin!("pending-expiry"));
    cmd.arg(csv.path())
        .args(["--now", "2023-02-01T00:00:00Z", "--format", "json"]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());

    let verdicts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(verdicts[0]["payment"], "p1");
    assert_eq!(verdicts[0]["expired"], true);
    assert_eq!(verdicts[0]["latest_status"], "PENDING");
}

#[test]
fn test_cli_default_period_is_three_days() {
    let csv = write_history(&["p1, AUTHORIZE, PENDING, 2023-01-01T00:00:00Z"]);

    let mut cmd = Command::new(cargo_bin!("pending-expiry"));
    cmd.arg(csv.path()).args(["--now", "2023-01-04T00:00:01Z"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("p1,true,PENDING,2023-01-04T00:00:00+00:00"));
}

#[test]
fn test_cli_named_zone_follows_daylight_saving() {
    // Deadline is 2023-03-29T10:00+02:00 (08:00Z), not 10:00+01:00 (09:00Z)
    let csv = write_history(&[
        "p1, AUTHORIZE, PENDING, 2023-03-24T10:00:00+01:00, Europe/Paris",
        "p2, AUTHORIZE, PENDING, 2023-03-24T10:00:00+01:00",
    ]);

    let mut cmd = Command::new(cargo_bin!("pending-expiry"));
    cmd.arg(csv.path())
        .args(["--expiration-days", "5", "--now", "2023-03-29T08:30:00Z"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("p1,true,PENDING,2023-03-29T10:00:00+02:00"))
        .stdout(predicate::str::contains("p2,false,PENDING,2023-03-29T10:00:00+01:00"));
}
