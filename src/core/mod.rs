//! Numeric core: comparison, solving and the built-in regression table.

#[macro_use]
pub mod debug; // gated debug logging (QUADRATIC_DEBUG=1) provides debug_log! macro
pub mod compare;
pub mod selftest;
pub mod solver;

pub use compare::{Comparator, Comparison};
pub use solver::{Coefficients, RootCount, Solution};
