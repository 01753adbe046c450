//! Interactive prompts over any `BufRead`/`Write` pair.
//!
//! Malformed input never escapes a prompt: each read prints a warning and
//! asks again until it gets what it wants. The only errors surfaced are
//! real I/O failures and end of input (`ErrorKind::UnexpectedEof`).

use std::cmp::Ordering;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;

use crate::core::solver::Coefficients;
use crate::debug_log;
use crate::io::text::{scan_number, strncmp_ci, CaseFold, Scanned};

const YES: &str = "YES";
const NO: &str = "NO";
/// Buffer size for yes/no answers: room for "YES" plus the terminator slot.
const ANSWER_CAPACITY: usize = 4;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// One physical line without its line terminator.
    fn next_line(&mut self) -> io::Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        if raw.ends_with(b"\n") {
            raw.pop();
            if raw.ends_with(b"\r") {
                raw.pop();
            }
        }
        // Invalid UTF-8 becomes U+FFFD and is rejected like any other garbage.
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    fn warn(&mut self, msg: impl Display) -> io::Result<()> {
        writeln!(self.output, "{} {msg}", "warn:".yellow().bold())
    }

    fn read_number<T: FromStr>(&mut self, what: &str) -> io::Result<T> {
        loop {
            let line = self.next_line()?;
            match scan_number::<T>(&line) {
                Scanned::Value(v) => return Ok(v),
                Scanned::Blank => continue,
                Scanned::NotANumber => {
                    self.warn(format_args!("{} is not {what}. Try again", line.trim()))?;
                }
                Scanned::Trailing => {
                    self.warn(
                        "You have written a number and some inappropriate symbols after that. Try again",
                    )?;
                }
            }
            debug_log!("reader", "rejected {line:?}");
        }
    }

    /// Reads a single real number, re-prompting on malformed input.
    pub fn read_f64(&mut self) -> io::Result<f64> {
        self.read_number("a number")
    }

    /// Reads a single integer, re-prompting on malformed input.
    pub fn read_int(&mut self) -> io::Result<i32> {
        self.read_number("an integer not negative number")
    }

    pub fn read_non_negative(&mut self) -> io::Result<usize> {
        let mut value = self.read_int()?;
        while value < 0 {
            self.warn("The number should not be negative. Try again")?;
            value = self.read_int()?;
        }
        // Non-negative i32 always fits.
        Ok(value as usize)
    }

    /// Reads one line, keeping at most `capacity - 1` characters folded
    /// with `fold`. The rest of the line is discarded. Returns the kept
    /// text and the length of the whole line.
    pub fn read_bounded_line(&mut self, capacity: usize, fold: CaseFold) -> io::Result<(String, usize)> {
        let line = self.next_line()?;
        let consumed = line.chars().count();
        let kept: String = line.chars().take(capacity.saturating_sub(1)).collect();
        Ok((fold.apply(&kept), consumed))
    }

    /// Asks `question` until the answer is exactly "yes" or "no", in any case.
    pub fn yes_no(&mut self, question: &str) -> io::Result<bool> {
        loop {
            writeln!(self.output, "{question}")?;
            writeln!(self.output, "{YES}/{NO}")?;
            self.output.flush()?;

            let (word, len) = self.read_bounded_line(ANSWER_CAPACITY, CaseFold::Keep)?;
            if len == YES.len() && strncmp_ci(&word, YES, YES.len()) == Ordering::Equal {
                return Ok(true);
            }
            if len == NO.len() && strncmp_ci(&word, NO, NO.len()) == Ordering::Equal {
                return Ok(false);
            }
            self.warn("There is no such option. Try again")?;
        }
    }

    pub fn read_coefficient(&mut self, name: char) -> io::Result<f64> {
        write!(self.output, "Coefficient \"{name}\": ")?;
        self.output.flush()?;
        let value = self.read_f64()?;
        writeln!(self.output)?;
        Ok(value)
    }

    pub fn read_coefficients(&mut self) -> io::Result<Coefficients> {
        let a = self.read_coefficient('a')?;
        let b = self.read_coefficient('b')?;
        let c = self.read_coefficient('c')?;
        Ok(Coefficients::new(a, b, c))
    }

    /// Asks how many digits to print after the decimal point, at most `max`.
    pub fn ask_precision(&mut self, max: usize) -> io::Result<usize> {
        writeln!(
            self.output,
            "Write how many digits after the decimal point will be in the solution"
        )?;
        write!(self.output, "The number of digits: ")?;
        self.output.flush()?;
        let mut digits = self.read_non_negative()?;
        while digits > max {
            self.warn(format_args!("The number should not be greater than {max}. Try again"))?;
            digits = self.read_non_negative()?;
        }
        writeln!(self.output)?;
        Ok(digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_inner().1).unwrap()
    }

    #[test]
    fn bounded_line_upcases_and_counts() {
        let mut p = prompter("yes\n");
        assert_eq!(
            p.read_bounded_line(4, CaseFold::Upper).unwrap(),
            ("YES".to_string(), 3)
        );
    }

    #[test]
    fn bounded_line_truncates_and_discards_rest() {
        let mut p = prompter("abcdefgh\nnext\n");
        assert_eq!(
            p.read_bounded_line(4, CaseFold::Lower).unwrap(),
            ("abc".to_string(), 8)
        );
        assert_eq!(
            p.read_bounded_line(4, CaseFold::Keep).unwrap(),
            ("nex".to_string(), 4)
        );
    }

    #[test]
    fn bounded_line_handles_crlf() {
        let mut p = prompter("no\r\n");
        assert_eq!(
            p.read_bounded_line(4, CaseFold::Keep).unwrap(),
            ("no".to_string(), 2)
        );
    }

    #[test]
    fn f64_retries_until_clean() {
        let mut p = prompter("abc\n12x\n\n  -4.5  \n");
        assert_eq!(p.read_f64().unwrap(), -4.5);
        let out = transcript(p);
        assert!(out.contains("abc is not a number. Try again"));
        assert!(out.contains("inappropriate symbols after that"));
    }

    #[test]
    fn non_negative_rejects_negative() {
        let mut p = prompter("-3\n2.5\n7\n");
        assert_eq!(p.read_non_negative().unwrap(), 7);
        let out = transcript(p);
        assert!(out.contains("The number should not be negative. Try again"));
        assert!(out.contains("inappropriate symbols"));
    }

    #[test]
    fn yes_no_requires_exact_words() {
        let mut p = prompter("yess\nmaybe\nY\nyEs\n");
        assert!(p.yes_no("Continue?").unwrap());
        let out = transcript(p);
        assert_eq!(out.matches("There is no such option. Try again").count(), 3);
        assert_eq!(out.matches("YES/NO").count(), 4);
    }

    #[test]
    fn yes_no_accepts_no() {
        let mut p = prompter("No\n");
        assert!(!p.yes_no("Continue?").unwrap());
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = prompter("oops\n");
        let err = p.read_f64().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn invalid_utf8_line_is_rejected_not_fatal() {
        let mut p = Prompter::new(Cursor::new(b"\xff\xfe\n3\n".to_vec()), Vec::new());
        assert_eq!(p.read_f64().unwrap(), 3.0);
        let out = transcript(p);
        assert!(out.contains("is not a number. Try again"));
    }

    #[test]
    fn invalid_utf8_answer_is_no_such_option() {
        let mut p = Prompter::new(Cursor::new(b"\xff\nno\n".to_vec()), Vec::new());
        assert!(!p.yes_no("Continue?").unwrap());
        assert!(transcript(p).contains("There is no such option. Try again"));
    }

    #[test]
    fn precision_above_limit_is_asked_again() {
        let mut p = prompter("100000\n4\n");
        assert_eq!(p.ask_precision(1000).unwrap(), 4);
        assert!(transcript(p).contains("The number should not be greater than 1000. Try again"));
    }

    #[test]
    fn coefficients_in_order() {
        let mut p = prompter("1\n-3\n2\n");
        assert_eq!(
            p.read_coefficients().unwrap(),
            Coefficients::new(1.0, -3.0, 2.0)
        );
        let out = transcript(p);
        assert!(out.contains("Coefficient \"a\": "));
        assert!(out.contains("Coefficient \"c\": "));
    }
}
