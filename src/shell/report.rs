//! Human-readable rendering of a [`Solution`].

use crate::core::solver::{RootCount, Solution};

/// Largest precision the formatter accepts.
pub const MAX_PRECISION: usize = u16::MAX as usize;

/// Only finite root sets need a precision.
pub fn needs_precision(solution: &Solution) -> bool {
    matches!(solution.root_count(), RootCount::One | RootCount::Two)
}

pub fn describe(solution: &Solution, digits: usize) -> String {
    match *solution {
        Solution::Infinite => {
            "There is infinite number of roots: every real number is a root".to_string()
        }
        Solution::NoRoots => "There are no roots".to_string(),
        Solution::One(x) => format!("The only one root is {}", fixed(x, digits)),
        Solution::Two(x1, x2) => format!(
            "The roots are {} and {}",
            fixed(x1, digits),
            fixed(x2, digits)
        ),
    }
}

fn fixed(x: f64, digits: usize) -> String {
    // -0.0 + 0.0 is +0.0
    format!("{:.*}", digits.min(MAX_PRECISION), x + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precision_only_for_finite_roots() {
        assert!(needs_precision(&Solution::One(1.0)));
        assert!(needs_precision(&Solution::Two(1.0, 2.0)));
        assert!(!needs_precision(&Solution::NoRoots));
        assert!(!needs_precision(&Solution::Infinite));
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(describe(&Solution::One(-0.0), 2), "The only one root is 0.00");
    }

    #[test]
    fn oversized_precision_is_clamped() {
        let text = describe(&Solution::One(1.0), 70_000);
        assert_eq!(text.len(), "The only one root is 1.".len() + MAX_PRECISION);
    }

    #[test]
    fn zero_digits() {
        assert_eq!(describe(&Solution::Two(1.4, 2.6), 0), "The roots are 1 and 3");
    }
}
