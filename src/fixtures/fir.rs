//! FIR filter tap fixture with Q16 fixed-point scaling.

/// Number of filter taps; coefficient and delay-line sequences share it.
pub const TAP_COUNT: usize = 4;

/// Advances the filter by one sample and returns the scaled output.
///
/// The delay line shifts by one position (element `i` receives the old
/// element `i - 1`), the new `input` lands at position 0, and the output
/// is the inner product of delay line and coefficients, arithmetically
/// right-shifted by 16 to undo the Q16 coefficient scaling. The inner
/// product uses wrapping 32-bit arithmetic throughout.
#[must_use]
pub fn fir_step(input: i32, coeffs: &[i32; TAP_COUNT], delay: &mut [i32; TAP_COUNT]) -> i32 {
    delay.copy_within(0..TAP_COUNT - 1, 1);
    delay[0] = input;

    let mut acc = 0i32;
    for (&c, &d) in coeffs.iter().zip(delay.iter()) {
        acc = acc.wrapping_add(c.wrapping_mul(d));
    }
    acc >> 16
}

#[cfg(kani)]
mod kani;
