//! End-to-end checks for the harness registry and run reporting.

use proofbed::harness::{self, Expectation, HarnessKind};
use proofbed::report::{HarnessResult, RunReport};

fn full_run() -> RunReport {
    let results = harness::registry()
        .iter()
        .map(|spec| HarnessResult::new(spec, &spec.execute()))
        .collect();
    RunReport::new(results)
}

#[test]
fn every_harness_matches_its_registered_expectation() {
    for spec in harness::registry() {
        let observed = spec.execute();
        assert!(
            spec.is_expected(&observed),
            "harness {} observed {:?} but expects {}",
            spec.name,
            observed,
            spec.expected
        );
    }
}

#[test]
fn counterexample_harnesses_expect_and_produce_violations() {
    let counterexamples: Vec<_> = harness::registry()
        .iter()
        .filter(|spec| spec.kind == HarnessKind::Counterexample)
        .collect();
    assert_eq!(counterexamples.len(), 3);

    for spec in counterexamples {
        assert_eq!(spec.expected, Expectation::Violation);
        let observed = spec.execute();
        assert_eq!(observed.expectation(), Expectation::Violation);
        assert!(observed.detail().is_some(), "violation carries a detail message");
    }
}

#[test]
fn full_run_report_has_no_unexpected_outcomes() {
    let report = full_run();
    assert_eq!(report.total, harness::registry().len());
    assert_eq!(report.unexpected, 0);
    assert!(report.all_as_expected());
}

#[test]
fn json_report_carries_per_harness_records() {
    let report = full_run();
    let value = serde_json::to_value(&report).expect("report serializes");

    let results = value
        .get("results")
        .and_then(serde_json::Value::as_array)
        .expect("results array");
    assert_eq!(results.len(), report.total);

    let overrun = results
        .iter()
        .find(|entry| entry.get("name").and_then(serde_json::Value::as_str) == Some("sum-array-overrun"))
        .expect("overrun harness reported");
    assert_eq!(
        overrun.get("observed").and_then(serde_json::Value::as_str),
        Some("violation")
    );
    assert!(
        overrun
            .get("detail")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|detail| detail.contains("fixture panicked"))
    );
}
