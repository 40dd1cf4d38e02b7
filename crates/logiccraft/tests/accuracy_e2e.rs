mod common;

use predicates::prelude::*;

use common::{logiccraft_in, workdir};

#[test]
fn accuracy_text_summary() {
    let dir = workdir();
    logiccraft_in(dir.path())
        .arg("accuracy")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS  Array: Binary Search"))
        .stdout(predicate::str::contains("FAIL  Graph: Dijkstra's Algorithm"))
        .stdout(predicate::str::contains("8/16 passed (50%)"));
}

#[test]
fn accuracy_json_report() {
    let dir = workdir();
    let output = logiccraft_in(dir.path())
        .args(["accuracy", "--format", "json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["schema_version"], 1);
    assert_eq!(v["tool"]["name"], "logiccraft");
    assert_eq!(v["total"], 16);
    assert_eq!(v["passed"], 8);
    assert_eq!(v["cases"].as_array().unwrap().len(), 16);
}

#[test]
fn accuracy_markdown_table() {
    let dir = workdir();
    logiccraft_in(dir.path())
        .args(["accuracy", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("|Case|Lang|Expected|Actual|Result|"))
        .stdout(predicate::str::contains("**8/16 passed**"));
}

#[test]
fn fail_under_met_succeeds() {
    let dir = workdir();
    logiccraft_in(dir.path())
        .args(["accuracy", "--fail-under", "8"])
        .assert()
        .success();
}

#[test]
fn fail_under_missed_fails_after_printing() {
    let dir = workdir();
    logiccraft_in(dir.path())
        .args(["accuracy", "--fail-under", "9"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("8/16 passed"))
        .stderr(predicate::str::contains("Accuracy below threshold: 8/16"));
}
