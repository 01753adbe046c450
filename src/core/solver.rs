//! Linear and quadratic equation solving: a·x² + b·x + c = 0.

use std::fmt;

use crate::core::compare::{Comparator, Comparison};
use crate::debug_log;

/// Coefficients of a·x² + b·x + c = 0.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Value of the left-hand side at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }
}

/// How many real roots an equation has.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RootCount {
    Infinite,
    Zero,
    One,
    Two,
}

impl fmt::Display for RootCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Matches the numeric tags printed by the self-test report.
        let n = match self {
            RootCount::Infinite => -1,
            RootCount::Zero => 0,
            RootCount::One => 1,
            RootCount::Two => 2,
        };
        write!(f, "{n}")
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Solution {
    /// Every real number is a root.
    Infinite,
    NoRoots,
    One(f64),
    /// `(-b - √D) / 2a` first, then `(-b + √D) / 2a`.
    Two(f64, f64),
}

impl Solution {
    pub fn root_count(&self) -> RootCount {
        match self {
            Solution::Infinite => RootCount::Infinite,
            Solution::NoRoots => RootCount::Zero,
            Solution::One(_) => RootCount::One,
            Solution::Two(..) => RootCount::Two,
        }
    }

    /// The meaningful roots, in solver order.
    pub fn roots(&self) -> Vec<f64> {
        match *self {
            Solution::Infinite | Solution::NoRoots => Vec::new(),
            Solution::One(x) => vec![x],
            Solution::Two(x1, x2) => vec![x1, x2],
        }
    }

    /// Both root slots with NaN standing in for the unused ones.
    pub fn as_pair(&self) -> (f64, f64) {
        match *self {
            Solution::Infinite | Solution::NoRoots => (f64::NAN, f64::NAN),
            Solution::One(x) => (x, f64::NAN),
            Solution::Two(x1, x2) => (x1, x2),
        }
    }
}

pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}

/// Solve with the default comparator.
pub fn solve(a: f64, b: f64, c: f64) -> Solution {
    solve_with(&Comparator::default(), Coefficients::new(a, b, c))
}

pub fn solve_with(cmp: &Comparator, coeffs: Coefficients) -> Solution {
    let Coefficients { a, b, c } = coeffs;
    if cmp.is_zero(a) {
        debug_log!("solve", "a ~ 0, linear branch: {b}x + {c} = 0");
        solve_linear_with(cmp, b, c)
    } else {
        solve_quadratic_with(cmp, a, b, c)
    }
}

/// Solves b·x + c = 0.
pub fn solve_linear(b: f64, c: f64) -> Solution {
    solve_linear_with(&Comparator::default(), b, c)
}

pub fn solve_linear_with(cmp: &Comparator, b: f64, c: f64) -> Solution {
    if cmp.is_zero(b) {
        if cmp.is_zero(c) {
            Solution::Infinite
        } else {
            Solution::NoRoots
        }
    } else {
        Solution::One(-c / b)
    }
}

fn solve_quadratic_with(cmp: &Comparator, a: f64, b: f64, c: f64) -> Solution {
    let d = discriminant(a, b, c);
    debug_log!("solve", "quadratic branch: D = {d}");

    match cmp.compare(d, 0.0) {
        Comparison::Less => Solution::NoRoots,
        Comparison::Equal => {
            // D may sit just below zero; within epsilon it counts as zero.
            let (x1, _) = quadratic_roots(a, b, d.max(0.0).sqrt());
            Solution::One(x1)
        }
        // NaN discriminants land here too.
        Comparison::Greater | Comparison::NotComparable => {
            let (x1, x2) = quadratic_roots(a, b, d.sqrt());
            Solution::Two(x1, x2)
        }
    }
}

fn quadratic_roots(a: f64, b: f64, sqrt_d: f64) -> (f64, f64) {
    debug_assert!(a != 0.0, "quadratic branch reached with a == 0");
    let double_a = 2.0 * a;
    ((-b - sqrt_d) / double_a, (-b + sqrt_d) / double_a)
}
