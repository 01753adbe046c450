//! Text helpers behind the prompts: token scanning, case folding and
//! bounded case-insensitive comparison.

use std::cmp::Ordering;
use std::str::FromStr;

/// Outcome of scanning one line for a single number.
#[derive(Clone, Debug, PartialEq)]
pub enum Scanned<T> {
    Value(T),
    /// A number followed by other non-whitespace characters.
    Trailing,
    NotANumber,
    /// Nothing but whitespace on the line.
    Blank,
}

/// Scans `line` for exactly one number of type `T`. Surrounding whitespace
/// is ignored; anything else after the number rejects the whole line.
pub fn scan_number<T: FromStr>(line: &str) -> Scanned<T> {
    let token = line.trim();
    if token.is_empty() {
        return Scanned::Blank;
    }
    if let Ok(v) = token.parse::<T>() {
        return Scanned::Value(v);
    }
    let unsigned = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    // All digits yet unparsable: out of range for `T`.
    if unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Scanned::NotANumber;
    }
    let mantissa = unsigned.strip_prefix('.').unwrap_or(unsigned);
    if mantissa.starts_with(|c: char| c.is_ascii_digit()) {
        Scanned::Trailing
    } else {
        Scanned::NotANumber
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CaseFold {
    #[default]
    Keep,
    Upper,
    Lower,
}

impl CaseFold {
    pub fn apply(self, s: &str) -> String {
        match self {
            CaseFold::Keep => s.to_owned(),
            CaseFold::Upper => s.to_ascii_uppercase(),
            CaseFold::Lower => s.to_ascii_lowercase(),
        }
    }
}

/// Compares at most `n` characters of `s1` and `s2` ignoring ASCII case.
/// A string that ends first orders before the other one.
pub fn strncmp_ci(s1: &str, s2: &str, n: usize) -> Ordering {
    let lhs = s1.chars().take(n).map(|c| c.to_ascii_uppercase());
    let rhs = s2.chars().take(n).map(|c| c.to_ascii_uppercase());
    lhs.cmp(rhs)
}
