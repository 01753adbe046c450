//! Epsilon-aware comparison of `f64` values.
//!
//! NaN is treated as equal to NaN so that "no root" slots compare cleanly
//! in the self-test table; comparing NaN with an ordinary number yields
//! [`Comparison::NotComparable`].

/// Default tolerance for floating point comparisons.
pub const EPSILON: f64 = 1.0e-6;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    /// Exactly one operand is NaN.
    NotComparable,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Comparator {
    epsilon: f64,
}

impl Default for Comparator {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl Comparator {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn compare(&self, x: f64, y: f64) -> Comparison {
        match (x.is_nan(), y.is_nan()) {
            (true, true) => Comparison::Equal,
            (true, false) | (false, true) => Comparison::NotComparable,
            (false, false) => {
                if (x - y).abs() > self.epsilon {
                    if x > y {
                        Comparison::Greater
                    } else {
                        Comparison::Less
                    }
                } else {
                    Comparison::Equal
                }
            }
        }
    }

    pub fn equal(&self, x: f64, y: f64) -> bool {
        self.compare(x, y) == Comparison::Equal
    }

    pub fn is_zero(&self, x: f64) -> bool {
        self.equal(x, 0.0)
    }
}

/// Compare with the default [`EPSILON`].
pub fn compare(x: f64, y: f64) -> Comparison {
    Comparator::default().compare(x, y)
}
