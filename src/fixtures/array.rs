//! Array summation fixtures.
//!
//! [`sum_array`] is the correct routine; [`sum_array_overrun`] preserves
//! the original off-by-one bounds bug as a counterexample target for the
//! external checker. The overrun variant panics when `count` equals the
//! sequence length, which is exactly the precondition the correct variant
//! documents.

/// Sums the first `count` elements of `values` with two's-complement wrap.
///
/// Callers are expected to pass `count == values.len()`; fewer elements
/// are summed if `count` is smaller, and excess `count` is ignored.
#[must_use]
pub fn sum_array(values: &[i32], count: usize) -> i32 {
    values
        .iter()
        .take(count)
        .fold(0i32, |acc, &v| acc.wrapping_add(v))
}

/// The deliberately buggy summation that iterates one past the end.
///
/// # Panics
///
/// Panics with an out-of-bounds access whenever `count >= values.len()`,
/// which is the violation the bounds-checking harness exists to flag.
#[must_use]
#[expect(
    clippy::indexing_slicing,
    reason = "the out-of-bounds access is the counterexample under test"
)]
pub fn sum_array_overrun(values: &[i32], count: usize) -> i32 {
    let mut total = 0i32;
    for i in 0..=count {
        total = total.wrapping_add(values[i]);
    }
    total
}

#[cfg(kani)]
mod kani;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[1, 2, 3, 4, 5], 15)]
    #[case(&[], 0)]
    #[case(&[-3, 3], 0)]
    #[case(&[i32::MAX, 1], i32::MIN)]
    fn sum_array_totals_all_elements(#[case] values: &[i32], #[case] expected: i32) {
        assert_eq!(sum_array(values, values.len()), expected);
    }

    #[test]
    fn sum_array_ignores_elements_past_count() {
        assert_eq!(sum_array(&[1, 2, 3, 4, 5], 3), 6);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn sum_array_overrun_trips_the_bounds_check() {
        let values = [1, 2, 3, 4, 5];
        let _ = sum_array_overrun(&values, values.len());
    }

    #[test]
    fn sum_array_overrun_matches_when_given_slack() {
        // One spare element hides the bug; the totals then agree.
        let values = [1, 2, 3, 4, 5, 0];
        assert_eq!(sum_array_overrun(&values, 4), sum_array(&values, 5));
    }
}
