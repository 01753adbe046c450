//! Built-in regression table for the solver.
//!
//! Each fixture carries the expected root count and root pair; a case
//! passes when the count matches and the roots match in either order.

use std::fmt;
use std::io::{self, Write};

use crate::core::compare::Comparator;
use crate::core::solver::{solve_with, Coefficients, RootCount, Solution};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fixture {
    pub expected: RootCount,
    pub coeffs: Coefficients,
    pub x1: f64,
    pub x2: f64,
}

const NAN: f64 = f64::NAN;

const fn fixture(expected: RootCount, a: f64, b: f64, c: f64, x1: f64, x2: f64) -> Fixture {
    Fixture {
        expected,
        coeffs: Coefficients::new(a, b, c),
        x1,
        x2,
    }
}

pub const FIXTURES: [Fixture; 10] = [
    fixture(RootCount::Two, 1.0, -3.0, 2.0, 1.0, 2.0),
    fixture(RootCount::One, 1.0, -2.0, 1.0, 1.0, 1.0),
    fixture(RootCount::Zero, 0.0, 0.0, 3.0, NAN, NAN),
    fixture(RootCount::Infinite, 0.0, 0.0, 0.0, NAN, NAN),
    fixture(RootCount::Two, 1.2, -5.3, 4.8, 1.271991, 3.144675),
    fixture(RootCount::One, 0.0, -20.4, 32.7, NAN, 1.602941),
    fixture(RootCount::Two, 207.53, -1054.72, 385.03, 4.686359, 0.395893),
    fixture(RootCount::One, 0.00043, -0.00021, 0.00028, 0.244186, 0.244186),
    fixture(RootCount::One, 34.0, 0.0, 0.0, 0.0, 0.0),
    fixture(RootCount::Zero, 20.78, 3.74, 8.23, NAN, NAN),
];

impl Fixture {
    /// Expected slots as the solver fills them. A single root written
    /// into both slots only occupies the first.
    fn expected_pair(&self, cmp: &Comparator) -> (f64, f64) {
        if self.expected == RootCount::One && !self.x1.is_nan() && cmp.equal(self.x1, self.x2) {
            (self.x1, f64::NAN)
        } else {
            (self.x1, self.x2)
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Failure {
    /// 1-based position in the table.
    pub number: usize,
    pub actual: Solution,
    pub fixture: Fixture,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x1, x2) = self.actual.as_pair();
        writeln!(f, "Test {} FAILED", self.number)?;
        writeln!(
            f,
            "x_1 = {x1:.6}, x_2 = {x2:.6}, n_roots = {}",
            self.actual.root_count()
        )?;
        write!(
            f,
            "Should be: x_1 = {:.6}, x_2 = {:.6} and {} roots",
            self.fixture.x1, self.fixture.x2, self.fixture.expected
        )
    }
}

fn pair_matches(cmp: &Comparator, actual: (f64, f64), expected: (f64, f64)) -> bool {
    let straight = cmp.equal(actual.0, expected.0) && cmp.equal(actual.1, expected.1);
    let swapped = cmp.equal(actual.0, expected.1) && cmp.equal(actual.1, expected.0);
    straight || swapped
}

/// Runs one fixture; `index` is 0-based.
pub fn check(cmp: &Comparator, index: usize, fixture: &Fixture) -> Option<Failure> {
    let actual = solve_with(cmp, fixture.coeffs);
    let passed = actual.root_count() == fixture.expected
        && pair_matches(cmp, actual.as_pair(), fixture.expected_pair(cmp));
    if passed {
        None
    } else {
        Some(Failure {
            number: index + 1,
            actual,
            fixture: *fixture,
        })
    }
}

pub fn run(cmp: &Comparator, fixtures: &[Fixture]) -> Vec<Failure> {
    fixtures
        .iter()
        .enumerate()
        .filter_map(|(i, f)| check(cmp, i, f))
        .collect()
}

/// Runs `fixtures`, writes every failure and a summary to `out`, and
/// returns the number of failed cases.
pub fn report<W: Write>(out: &mut W, cmp: &Comparator, fixtures: &[Fixture]) -> io::Result<usize> {
    let failures = run(cmp, fixtures);
    for failure in &failures {
        writeln!(out, "{failure}\n")?;
    }
    if failures.is_empty() {
        writeln!(out, "There are no errors")?;
    } else {
        writeln!(out, "{} of {} tests failed", failures.len(), fixtures.len())?;
    }
    Ok(failures.len())
}
