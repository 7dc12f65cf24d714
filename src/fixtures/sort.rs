//! In-place bubble sort fixture.

/// Sorts `values` in place into non-decreasing order.
///
/// Classic bubble sort: each pass bubbles the largest unsorted element to
/// the end, so after completion the slice is a non-decreasing permutation
/// of its original contents.
#[expect(
    clippy::indexing_slicing,
    reason = "loop bounds keep j and j + 1 within the slice"
)]
pub fn bubble_sort(values: &mut [i32]) {
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

#[cfg(kani)]
mod kani;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&mut [5, 2, 8, 1, 9], &[1, 2, 5, 8, 9])]
    #[case(&mut [1, 2, 3], &[1, 2, 3])]
    #[case(&mut [3, 2, 1], &[1, 2, 3])]
    #[case(&mut [7, 7, 7], &[7, 7, 7])]
    #[case(&mut [i32::MAX, i32::MIN, 0], &[i32::MIN, 0, i32::MAX])]
    fn bubble_sort_orders_the_slice(#[case] values: &mut [i32], #[case] expected: &[i32]) {
        bubble_sort(values);
        assert_eq!(values, expected);
    }

    #[test]
    fn bubble_sort_handles_degenerate_lengths() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);

        let mut single = [42];
        bubble_sort(&mut single);
        assert_eq!(single, [42]);
    }
}
