//! Scalar arithmetic fixtures.
//!
//! Absolute value ships in two structurally distinct implementations so
//! equivalence harnesses have a pair to compare; likewise the saturating
//! and guarded adders compute the same clamp through different control
//! flow. Plain addition wraps on overflow and is intentionally unchecked.

/// Absolute value via an explicit branch.
///
/// Negation wraps at `i32::MIN`, so `abs_branching(i32::MIN)` returns
/// `i32::MIN` rather than panicking.
#[must_use]
pub const fn abs_branching(x: i32) -> i32 {
    if x < 0 { x.wrapping_neg() } else { x }
}

/// Absolute value via the branchless sign-mask idiom.
///
/// `x >> 31` is all ones exactly when `x` is negative; XOR-and-subtract
/// then yields the magnitude. Wraps at `i32::MIN` like [`abs_branching`].
#[must_use]
pub const fn abs_select(x: i32) -> i32 {
    let mask = x >> 31;
    (x ^ mask).wrapping_sub(mask)
}

/// Returns the numerically greater operand; ties return either.
#[must_use]
pub const fn max(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}

/// Plain addition with two's-complement wrap on overflow.
///
/// The missing overflow check is the point: this fixture is the target
/// the overflow counterexample driver aims at.
#[must_use]
pub const fn wrapping_add(a: i32, b: i32) -> i32 { a.wrapping_add(b) }

/// Saturating addition by widening to `i64` and clamping.
///
/// Equals `clamp(a + b, i32::MIN, i32::MAX)` evaluated in unbounded
/// integers.
#[must_use]
pub fn saturating_add(a: i32, b: i32) -> i32 {
    let sum = i64::from(a) + i64::from(b);
    let clamped = sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
    #[expect(clippy::expect_used, reason = "sum is clamped to the i32 range")]
    let narrowed = i32::try_from(clamped).expect("clamped sum fits in i32");
    narrowed
}

/// Overflow-safe addition that pre-checks the representable range.
///
/// Returns `i32::MAX` or `i32::MIN` when the mathematical sum would
/// escape the range, otherwise the exact sum. Computes the same function
/// as [`saturating_add`] through different control flow, making the pair
/// an equivalence-checking target.
#[must_use]
pub const fn guarded_add(a: i32, b: i32) -> i32 {
    if a > 0 && b > i32::MAX - a {
        i32::MAX
    } else if a < 0 && b < i32::MIN - a {
        i32::MIN
    } else {
        a + b
    }
}

#[cfg(kani)]
mod kani;
