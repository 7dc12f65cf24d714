//! Kani harnesses for the FIR filter tap.

use super::{TAP_COUNT, fir_step};

#[kani::proof]
#[kani::unwind(5)]
fn kani_fir_step_advances_the_delay_line() {
    let input: i32 = kani::any();
    let coeffs: [i32; TAP_COUNT] = kani::any();
    let mut delay: [i32; TAP_COUNT] = kani::any();
    let before = delay;

    let _ = fir_step(input, &coeffs, &mut delay);

    kani::assert(delay[0] == input, "new sample lands at the head of the delay line");
    for i in 1..TAP_COUNT {
        kani::assert(delay[i] == before[i - 1], "delay line shifts by one sample");
    }
}

#[kani::proof]
#[kani::unwind(5)]
fn kani_fir_step_zero_coefficients_yield_zero() {
    let input: i32 = kani::any();
    let coeffs = [0i32; TAP_COUNT];
    let mut delay: [i32; TAP_COUNT] = kani::any();

    kani::assert(
        fir_step(input, &coeffs, &mut delay) == 0,
        "all-zero coefficients silence the output",
    );
}
