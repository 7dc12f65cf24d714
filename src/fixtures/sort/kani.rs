//! Kani harnesses for the bubble sort fixture.
//!
//! Bounded to short slices to keep the state space tractable; the nested
//! loops need an unwind bound of length + 1.

use super::bubble_sort;

const KANI_SORT_LEN: usize = 3;

#[kani::proof]
#[kani::unwind(4)]
fn kani_bubble_sort_produces_nondecreasing_order() {
    let mut values: [i32; KANI_SORT_LEN] = kani::any();

    bubble_sort(&mut values);

    for pair in values.windows(2) {
        kani::assert(pair[0] <= pair[1], "adjacent elements are ordered");
    }
}

#[kani::proof]
#[kani::unwind(4)]
fn kani_bubble_sort_preserves_multiplicities() {
    let original: [i32; KANI_SORT_LEN] = kani::any();
    let mut sorted = original;

    bubble_sort(&mut sorted);

    for &v in &original {
        let before = original.iter().filter(|&&x| x == v).count();
        let after = sorted.iter().filter(|&&x| x == v).count();
        kani::assert(before == after, "element multiplicity is preserved");
    }
}
