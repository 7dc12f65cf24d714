//! Structured run reports for the harness runner.
//!
//! Mirrors the per-run result records an external verification wrapper
//! emits: one entry per harness with its expected and observed outcome,
//! plus a roll-up of how many harnesses behaved unexpectedly.

use serde::Serialize;

use crate::harness::{Expectation, HarnessKind, HarnessSpec, Observed};

/// Outcome of a single executed harness.
#[derive(Clone, Debug, Serialize)]
pub struct HarnessResult {
    /// Registered harness name.
    pub name: &'static str,
    /// How the harness exercises its fixtures.
    pub kind: HarnessKind,
    /// The outcome the harness is designed to produce.
    pub expected: Expectation,
    /// The outcome actually observed.
    pub observed: Expectation,
    /// Violation detail, present when an assertion failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Whether the observed outcome matches the expectation.
    pub as_expected: bool,
}

impl HarnessResult {
    /// Pairs a harness specification with what executing it produced.
    #[must_use]
    pub fn new(spec: &HarnessSpec, observed: &Observed) -> Self {
        Self {
            name: spec.name,
            kind: spec.kind,
            expected: spec.expected,
            observed: observed.expectation(),
            detail: observed.detail().map(String::from),
            as_expected: spec.is_expected(observed),
        }
    }
}

/// Aggregate report for one runner invocation.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    /// Number of harnesses executed.
    pub total: usize,
    /// Number whose observed outcome differed from the expectation.
    pub unexpected: usize,
    /// Per-harness results in execution order.
    pub results: Vec<HarnessResult>,
}

impl RunReport {
    /// Builds a report from per-harness results, computing the roll-up.
    #[must_use]
    pub fn new(results: Vec<HarnessResult>) -> Self {
        let unexpected = results.iter().filter(|result| !result.as_expected).count();
        Self {
            total: results.len(),
            unexpected,
            results,
        }
    }

    /// Returns `true` when every harness matched its expectation.
    #[must_use]
    pub const fn all_as_expected(&self) -> bool { self.unexpected == 0 }
}
