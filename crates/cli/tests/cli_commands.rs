use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const STORE: &str = r#"{
  "CASE-1": {
    "subject": { "subject": "Fostering", "reason": "Enquiry", "case_type": "Fostering" },
    "fields": [
      { "name": "firstname", "value": "Alex" },
      { "name": "withpartner", "value": "Yes" },
      { "name": "firstname_2", "value": "Sam" },
      { "name": "areyouemployed", "value": "No" }
    ]
  }
}"#;

#[allow(deprecated)]
fn fostering(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fostering").expect("binary");
    cmd.current_dir(workdir).arg("--quiet");
    cmd
}

#[test]
fn decode_prints_the_case_view() {
    let temp = tempdir().expect("temp dir");
    fs::write(temp.path().join("cases.json"), STORE).expect("seed store");

    let output = fostering(temp.path())
        .args(["decode", "--store", "cases.json", "--case", "CASE-1"])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["schema_version"], 1);
    assert_eq!(body["case"]["first_applicant"]["first_name"], "Alex");
    assert_eq!(body["case"]["second_applicant"]["first_name"], "Sam");
    assert_eq!(
        body["case"]["first_applicant"]["employment"]["are_you_employed"],
        false
    );
}

#[test]
fn update_applies_payload_and_reports_status() {
    let temp = tempdir().expect("temp dir");
    fs::write(temp.path().join("cases.json"), STORE).expect("seed store");
    fs::write(
        temp.path().join("payload.json"),
        r#"{
            "section": "your_partnership",
            "case_reference": "CASE-1",
            "details": { "married_or_in_civil_partnership": false, "date_moved_in_together": "2020-01-01" }
        }"#,
    )
    .expect("payload");

    let output = fostering(temp.path())
        .args([
            "update",
            "--store",
            "cases.json",
            "--workflow",
            "home-visit",
            "--payload",
            "payload.json",
        ])
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["section"], "your_partnership");
    assert_eq!(body["status"], "Completed");

    let stored = fs::read_to_string(temp.path().join("cases.json")).expect("store");
    assert!(stored.contains("yourpartnershipstatus"));
    assert!(stored.contains("01/01/2020"));
}

#[test]
fn unknown_case_fails() {
    let temp = tempdir().expect("temp dir");
    fs::write(temp.path().join("cases.json"), STORE).expect("seed store");

    fostering(temp.path())
        .args(["decode", "--store", "cases.json", "--case", "CASE-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CASE-404"));
}

#[test]
fn schema_describes_the_case_view() {
    let temp = tempdir().expect("temp dir");

    let output = fostering(temp.path())
        .arg("schema")
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["title"], "FosteringCase");
}

#[test]
fn invalid_config_is_rejected() {
    let temp = tempdir().expect("temp dir");
    fs::write(temp.path().join("gateway.toml"), "address_history_years = 0\n").expect("config");

    fostering(temp.path())
        .args(["--config", "gateway.toml", "schema"])
        .assert()
        .failure();
}
