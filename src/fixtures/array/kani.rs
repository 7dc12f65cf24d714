//! Kani harnesses for the array summation fixtures.

use super::{sum_array, sum_array_overrun};

const KANI_ARRAY_LEN: usize = 5;

#[kani::proof]
#[kani::unwind(6)]
fn kani_sum_array_covers_exactly_count_elements() {
    let values: [i32; KANI_ARRAY_LEN] = kani::any();

    let mut expected = 0i32;
    for &v in &values {
        expected = expected.wrapping_add(v);
    }

    kani::assert(
        sum_array(&values, values.len()) == expected,
        "summation totals exactly the first count elements",
    );
}

#[kani::proof]
#[kani::unwind(6)]
fn kani_sum_array_prefix_is_independent_of_tail() {
    let values: [i32; KANI_ARRAY_LEN] = kani::any();
    let mut altered = values;
    altered[KANI_ARRAY_LEN - 1] = kani::any();

    kani::assert(
        sum_array(&values, KANI_ARRAY_LEN - 1) == sum_array(&altered, KANI_ARRAY_LEN - 1),
        "elements past count cannot influence the total",
    );
}

#[kani::proof]
#[kani::should_panic]
#[kani::unwind(7)]
fn kani_sum_array_overrun_reads_past_the_end() {
    let values: [i32; KANI_ARRAY_LEN] = kani::any();
    let _ = sum_array_overrun(&values, values.len());
}
