//! Verification fixtures and harness drivers for external checkers.
//!
//! This crate packages a set of small, deterministic integer fixtures
//! (absolute value, max, three flavours of addition, array summation,
//! bubble sort, a FIR filter tap) together with assertion-bearing harness
//! drivers that exercise them. Concrete drivers double as unit tests,
//! equivalence drivers compare independent implementations of the same
//! mathematical function, and counterexample drivers preserve deliberate
//! bugs as targets an external checker must flag.
//!
//! Symbolic analysis lives in per-fixture `kani` submodules compiled only
//! under `cfg(kani)`; the `proofbed` binary executes the concrete side of
//! the registry and reports outcomes.

pub mod fixtures;
pub mod harness;
pub mod report;
