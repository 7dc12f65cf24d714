//! Pure fixture operations exercised by the harness drivers.
//!
//! Every fixture is a total, deterministic function over 32-bit
//! two's-complement integers or fixed-length sequences of them. Fixtures
//! carry no state and perform no I/O, so an external checker can analyse
//! each one in isolation. Deliberately flawed variants are kept as
//! counterexample targets and are named accordingly.

pub mod arith;
pub mod array;
pub mod fir;
pub mod sort;
