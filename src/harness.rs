//! Harness drivers and the registry that exposes them to external tools.
//!
//! A harness prepares inputs, invokes one or more fixtures, and asserts a
//! boolean property. Concrete harnesses act as unit tests, equivalence
//! harnesses compare two implementations of the same mathematical
//! function, and counterexample harnesses carry deliberately violated
//! assertions that a checker is expected to flag. The registry records an
//! expected outcome for each harness so a runner can tell a
//! counterexample behaving as designed from a genuine regression.

pub mod drivers;

use std::fmt;
use std::panic;

use serde::Serialize;
use thiserror::Error;

/// Errors raised when an asserted property does not hold.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// A boolean property asserted by a driver was violated.
    #[error("property violated: {0}")]
    Property(&'static str),
    /// The fixture panicked while executing (e.g. an out-of-bounds read).
    #[error("fixture panicked: {0}")]
    Panicked(String),
}

/// Checks a driver property, converting a violation into an error.
pub(crate) const fn ensure(condition: bool, property: &'static str) -> Result<(), AssertionError> {
    if condition {
        Ok(())
    } else {
        Err(AssertionError::Property(property))
    }
}

type Driver = fn() -> Result<(), AssertionError>;

/// Classification of a harness by how it exercises its fixtures.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarnessKind {
    /// Fixed constant inputs with known-good expected values.
    Concrete,
    /// Two implementations of one function compared on shared inputs.
    Equivalence,
    /// A deliberately violated assertion kept as a checker target.
    Counterexample,
}

impl fmt::Display for HarnessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Concrete => "concrete",
            Self::Equivalence => "equivalence",
            Self::Counterexample => "counterexample",
        };
        f.write_str(label)
    }
}

/// The outcome a harness is registered to produce.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Expectation {
    /// Every assertion holds.
    Pass,
    /// At least one assertion is violated.
    Violation,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pass => "pass",
            Self::Violation => "violation",
        };
        f.write_str(label)
    }
}

/// The outcome observed when a harness actually ran.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Observed {
    /// The driver returned without violating any assertion.
    Passed,
    /// An assertion was violated or the fixture panicked.
    Violated {
        /// Human-readable description of the violated property.
        detail: String,
    },
}

impl Observed {
    /// Maps the observation onto the expectation it satisfies.
    #[must_use]
    pub const fn expectation(&self) -> Expectation {
        match self {
            Self::Passed => Expectation::Pass,
            Self::Violated { .. } => Expectation::Violation,
        }
    }

    /// Returns the violation detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Violated { detail } => Some(detail.as_str()),
        }
    }
}

/// A registered harness: name, classification, expected outcome, driver.
#[derive(Clone, Copy, Debug)]
pub struct HarnessSpec {
    /// Unique name used to select the harness from the runner.
    pub name: &'static str,
    /// How the harness exercises its fixtures.
    pub kind: HarnessKind,
    /// The outcome the harness is designed to produce.
    pub expected: Expectation,
    driver: Driver,
}

impl HarnessSpec {
    /// Runs the driver to completion, or to its first failing assertion.
    ///
    /// A panic inside the fixture (the bounds-overrun counterexample) is
    /// caught and reported as a violation rather than aborting the
    /// process, matching how an external checker surfaces the failure.
    #[must_use]
    pub fn execute(&self) -> Observed {
        match panic::catch_unwind(self.driver) {
            Ok(Ok(())) => Observed::Passed,
            Ok(Err(err)) => Observed::Violated {
                detail: err.to_string(),
            },
            Err(payload) => Observed::Violated {
                detail: AssertionError::Panicked(panic_message(payload.as_ref())).to_string(),
            },
        }
    }

    /// Returns `true` if the observed outcome matches the registered
    /// expectation.
    #[must_use]
    pub fn is_expected(&self, observed: &Observed) -> bool {
        self.expected == observed.expectation()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| String::from("opaque panic payload"))
        },
        |message| String::from(*message),
    )
}

static REGISTRY: [HarnessSpec; 11] = [
    HarnessSpec {
        name: "max-concrete",
        kind: HarnessKind::Concrete,
        expected: Expectation::Pass,
        driver: drivers::max_concrete,
    },
    HarnessSpec {
        name: "abs-concrete",
        kind: HarnessKind::Concrete,
        expected: Expectation::Pass,
        driver: drivers::abs_concrete,
    },
    HarnessSpec {
        name: "sum-array-concrete",
        kind: HarnessKind::Concrete,
        expected: Expectation::Pass,
        driver: drivers::sum_array_concrete,
    },
    HarnessSpec {
        name: "bubble-sort-concrete",
        kind: HarnessKind::Concrete,
        expected: Expectation::Pass,
        driver: drivers::bubble_sort_concrete,
    },
    HarnessSpec {
        name: "fir-impulse-response",
        kind: HarnessKind::Concrete,
        expected: Expectation::Pass,
        driver: drivers::fir_impulse_response,
    },
    HarnessSpec {
        name: "fir-delay-line",
        kind: HarnessKind::Concrete,
        expected: Expectation::Pass,
        driver: drivers::fir_delay_line,
    },
    HarnessSpec {
        name: "abs-equivalence",
        kind: HarnessKind::Equivalence,
        expected: Expectation::Pass,
        driver: drivers::abs_equivalence,
    },
    HarnessSpec {
        name: "add-equivalence",
        kind: HarnessKind::Equivalence,
        expected: Expectation::Pass,
        driver: drivers::add_equivalence,
    },
    HarnessSpec {
        name: "max-misordered",
        kind: HarnessKind::Counterexample,
        expected: Expectation::Violation,
        driver: drivers::max_misordered,
    },
    HarnessSpec {
        name: "plain-add-overflow",
        kind: HarnessKind::Counterexample,
        expected: Expectation::Violation,
        driver: drivers::plain_add_overflow,
    },
    HarnessSpec {
        name: "sum-array-overrun",
        kind: HarnessKind::Counterexample,
        expected: Expectation::Violation,
        driver: drivers::sum_array_overrun,
    },
];

/// Returns every registered harness in a stable order.
#[must_use]
pub fn registry() -> &'static [HarnessSpec] { &REGISTRY }

/// Looks up a harness by its registered name.
#[must_use]
pub fn find(name: &str) -> Option<&'static HarnessSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn registry_names_are_unique() {
        let names: BTreeSet<&str> = registry().iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), registry().len());
    }

    #[test]
    fn find_locates_registered_harnesses() {
        let spec = find("abs-equivalence").expect("harness is registered");
        assert_eq!(spec.kind, HarnessKind::Equivalence);
        assert!(find("no-such-harness").is_none());
    }

    #[test]
    fn ensure_converts_violations_into_errors() {
        assert!(ensure(true, "holds").is_ok());
        let err = ensure(false, "does not hold").expect_err("violation");
        assert_eq!(err.to_string(), "property violated: does not hold");
    }

    #[test]
    fn execute_reports_a_passing_driver() {
        let spec = find("max-concrete").expect("harness is registered");
        let observed = spec.execute();
        assert_eq!(observed, Observed::Passed);
        assert!(spec.is_expected(&observed));
        assert!(observed.detail().is_none());
    }

    #[test]
    fn execute_surfaces_a_violated_assertion() {
        let spec = find("max-misordered").expect("harness is registered");
        let observed = spec.execute();
        assert_eq!(observed.expectation(), Expectation::Violation);
        assert!(spec.is_expected(&observed));
        assert!(
            observed
                .detail()
                .is_some_and(|detail| detail.contains("property violated"))
        );
    }

    #[test]
    fn execute_converts_a_fixture_panic_into_a_violation() {
        let spec = find("sum-array-overrun").expect("harness is registered");
        let observed = spec.execute();
        assert_eq!(observed.expectation(), Expectation::Violation);
        assert!(
            observed
                .detail()
                .is_some_and(|detail| detail.contains("fixture panicked"))
        );
    }
}
