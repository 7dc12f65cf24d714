//! Exit-status and output contract of the `proofbed` runner binary.

use std::process::{Command, Output};

fn run_proofbed(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_proofbed"))
        .args(args)
        .output()
        .expect("runner binary executes")
}

#[test]
fn list_prints_every_registered_harness() {
    let output = run_proofbed(&["list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("listing is UTF-8");
    for name in ["max-concrete", "abs-equivalence", "sum-array-overrun"] {
        assert!(stdout.contains(name), "listing mentions {name}");
    }
}

#[test]
fn full_run_exits_zero_when_all_outcomes_are_expected() {
    let output = run_proofbed(&["run"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("report is UTF-8");
    assert!(stdout.contains("0 unexpected"));
}

#[test]
fn single_harness_run_reports_its_violation_detail() {
    let output = run_proofbed(&["run", "--harness", "sum-array-overrun", "--json"]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report parses as JSON");
    assert_eq!(report.get("total").and_then(serde_json::Value::as_u64), Some(1));
    assert_eq!(report.get("unexpected").and_then(serde_json::Value::as_u64), Some(0));

    let entry = report
        .get("results")
        .and_then(|results| results.get(0))
        .expect("one result");
    assert_eq!(
        entry.get("expected").and_then(serde_json::Value::as_str),
        Some("violation")
    );
    assert_eq!(entry.get("as_expected").and_then(serde_json::Value::as_bool), Some(true));
}

#[test]
fn unknown_harness_name_fails_the_run() {
    let output = run_proofbed(&["run", "--harness", "no-such-harness"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).expect("error output is UTF-8");
    assert!(stderr.contains("unknown harness"));
}
