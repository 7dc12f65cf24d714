//! Kani harnesses for the scalar arithmetic fixtures.

use super::{abs_branching, abs_select, guarded_add, max, saturating_add, wrapping_add};

#[kani::proof]
fn kani_abs_magnitude() {
    let x: i32 = kani::any();
    kani::assume(x != i32::MIN);

    let magnitude = abs_branching(x);

    kani::assert(magnitude >= 0, "absolute value is non-negative");
    kani::assert(
        magnitude == x || magnitude == x.wrapping_neg(),
        "absolute value is x or its negation",
    );
}

#[kani::proof]
fn kani_abs_implementations_agree() {
    let x: i32 = kani::any();
    kani::assert(
        abs_branching(x) == abs_select(x),
        "branching and branchless abs agree on every input",
    );
}

#[kani::proof]
fn kani_max_bounds_both_operands() {
    let a: i32 = kani::any();
    let b: i32 = kani::any();

    let greater = max(a, b);

    kani::assert(greater >= a, "max dominates its first operand");
    kani::assert(greater >= b, "max dominates its second operand");
    kani::assert(greater == a || greater == b, "max returns one of its operands");
}

#[kani::proof]
fn kani_saturating_add_matches_unbounded_clamp() {
    let a: i32 = kani::any();
    let b: i32 = kani::any();

    let sum = i64::from(a) + i64::from(b);
    let expected = sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX));

    kani::assert(
        i64::from(saturating_add(a, b)) == expected,
        "saturating add equals the clamped unbounded sum",
    );
}

#[kani::proof]
fn kani_add_implementations_agree() {
    let a: i32 = kani::any();
    let b: i32 = kani::any();

    kani::assert(
        guarded_add(a, b) == saturating_add(a, b),
        "guarded and widening adders are bitwise equal",
    );
}

#[kani::proof]
fn kani_wrapping_add_is_modular() {
    let a: i32 = kani::any();
    let b: i32 = kani::any();

    let wrapped = i64::from(wrapping_add(a, b));
    let exact = i64::from(a) + i64::from(b);

    kani::assert(
        wrapped == exact || wrapped == exact - (1i64 << 32) || wrapped == exact + (1i64 << 32),
        "plain add differs from the exact sum by at most one modulus",
    );
}
