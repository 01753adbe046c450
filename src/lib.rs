//! Library surface shared by the `quadratic` binary and the integration tests.
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod shell;

pub use crate::core::compare::{compare, Comparator, Comparison, EPSILON};
pub use crate::core::solver::{solve, Coefficients, RootCount, Solution};
