//! The registered harness drivers.
//!
//! Each driver prepares inputs, invokes one or more fixtures, and checks
//! a property through [`ensure`], halting at the first violation. The
//! counterexample drivers at the bottom keep the deliberately broken
//! assertions of the original fixture set alive as checker targets.

use super::{AssertionError, ensure};
use crate::fixtures::arith::{
    abs_branching,
    abs_select,
    guarded_add,
    max,
    saturating_add,
    wrapping_add,
};
use crate::fixtures::array::sum_array;
use crate::fixtures::fir::{TAP_COUNT, fir_step};
use crate::fixtures::sort::bubble_sort;

/// Boundary-heavy probe inputs shared by the equivalence drivers.
const PROBES: [i32; 8] = [
    i32::MIN,
    i32::MIN + 1,
    -1,
    0,
    1,
    0x4000_0000,
    i32::MAX - 1,
    i32::MAX,
];

/// Concrete checks for the max fixture.
///
/// # Errors
/// Returns an error at the first violated property.
pub fn max_concrete() -> Result<(), AssertionError> {
    ensure(max(5, 3) == 5, "max(5, 3) picks the greater first operand")?;
    ensure(max(2, 7) == 7, "max(2, 7) picks the greater second operand")?;
    ensure(max(4, 4) == 4, "max(4, 4) returns the tied value")?;
    Ok(())
}

/// Concrete checks for both absolute-value fixtures.
///
/// # Errors
/// Returns an error at the first violated property.
pub fn abs_concrete() -> Result<(), AssertionError> {
    ensure(abs_branching(-10) == 10, "abs(-10) is 10")?;
    ensure(abs_branching(10) == 10, "abs(10) is 10")?;
    ensure(abs_branching(0) == 0, "abs(0) is 0")?;
    ensure(abs_select(-5) == 5, "branchless abs(-5) is 5")?;
    Ok(())
}

/// Concrete check for array summation over a full-length prefix.
///
/// # Errors
/// Returns an error if the total is wrong.
pub fn sum_array_concrete() -> Result<(), AssertionError> {
    let values = [1, 2, 3, 4, 5];
    ensure(
        sum_array(&values, values.len()) == 15,
        "sum of [1, 2, 3, 4, 5] is 15",
    )
}

/// Sorts a fixed sequence and checks the result is ordered element-wise.
///
/// # Errors
/// Returns an error if any adjacent pair is out of order or the sorted
/// sequence differs from the known permutation.
pub fn bubble_sort_concrete() -> Result<(), AssertionError> {
    let mut values = [5, 2, 8, 1, 9];
    bubble_sort(&mut values);

    for pair in values.windows(2) {
        ensure(
            pair.first() <= pair.last(),
            "adjacent elements are non-decreasing after the sort",
        )?;
    }
    ensure(
        values == [1, 2, 5, 8, 9],
        "sorted sequence is the ordered permutation of the input",
    )
}

/// Feeds a unit impulse through the filter and checks the response.
///
/// With coefficients scaled by 2^16, the impulse response must reproduce
/// the coefficient sequence followed by silence.
///
/// # Errors
/// Returns an error if any output sample is wrong.
pub fn fir_impulse_response() -> Result<(), AssertionError> {
    let one_q16 = 1 << 16;
    let coeffs = [one_q16, 2 * one_q16, 3 * one_q16, 4 * one_q16];
    let mut delay = [0i32; TAP_COUNT];

    let expected = [1, 2, 3, 4, 0];
    for (step, (input, want)) in [1, 0, 0, 0, 0].into_iter().zip(expected).enumerate() {
        let got = fir_step(input, &coeffs, &mut delay);
        ensure(
            got == want,
            match step {
                0..=3 => "impulse response reproduces the coefficient sequence",
                _ => "impulse response decays to silence past the last tap",
            },
        )?;
    }
    Ok(())
}

/// Checks that the delay line advances by exactly one sample per step.
///
/// # Errors
/// Returns an error if the delay line holds the wrong history.
pub fn fir_delay_line() -> Result<(), AssertionError> {
    let coeffs = [0i32; TAP_COUNT];
    let mut delay = [0i32; TAP_COUNT];

    for input in [10, 20, 30] {
        let _ = fir_step(input, &coeffs, &mut delay);
    }
    ensure(
        delay == [30, 20, 10, 0],
        "delay line holds the last inputs newest-first",
    )
}

/// Equivalence of the branching and branchless absolute-value fixtures.
///
/// # Errors
/// Returns an error on the first probe where the outputs differ.
pub fn abs_equivalence() -> Result<(), AssertionError> {
    for x in PROBES {
        ensure(
            abs_branching(x) == abs_select(x),
            "both abs implementations produce bitwise-equal outputs",
        )?;
    }
    Ok(())
}

/// Equivalence of the widening and guarded saturating adders.
///
/// # Errors
/// Returns an error on the first probe pair where the outputs differ.
pub fn add_equivalence() -> Result<(), AssertionError> {
    for a in PROBES {
        for b in PROBES {
            ensure(
                saturating_add(a, b) == guarded_add(a, b),
                "both saturating adders produce bitwise-equal outputs",
            )?;
        }
    }
    Ok(())
}

/// Counterexample: asserts that max returns the lesser operand.
///
/// The assertion is false by design; a checker that fails to flag it is
/// broken.
///
/// # Errors
/// Always returns the violated property.
pub fn max_misordered() -> Result<(), AssertionError> {
    ensure(max(-1, -2) == -2, "max(-1, -2) returns the lesser operand")
}

/// Counterexample: asserts that plain addition preserves the exact sum
/// at the top of the range, where it actually wraps.
///
/// # Errors
/// Always returns the violated property.
pub fn plain_add_overflow() -> Result<(), AssertionError> {
    let sum = wrapping_add(i32::MAX, 1);
    ensure(
        i64::from(sum) == i64::from(i32::MAX) + 1,
        "plain add preserves the exact sum at the top of the range",
    )
}

/// Counterexample: runs the off-by-one summation over a full-length
/// prefix, tripping the bounds check.
///
/// # Errors
/// Never returns an error; the fixture panics first and the harness
/// executor reports the panic as the violation.
pub fn sum_array_overrun() -> Result<(), AssertionError> {
    let values = [1, 2, 3, 4, 5];
    let total = sum_array_overrun_total(&values);
    ensure(total == 15, "overrunning summation still totals the prefix")
}

fn sum_array_overrun_total(values: &[i32]) -> i32 {
    crate::fixtures::array::sum_array_overrun(values, values.len())
}
