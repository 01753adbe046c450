use std::cmp::Ordering;
use std::io::Cursor;

use quadratic_solver::io::{strncmp_ci, CaseFold, Prompter};
use quadratic_solver::shell::MAX_PRECISION;

fn prompter(input: &str) -> Prompter<Cursor<&[u8]>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes()), Vec::new())
}

#[test]
fn bounded_read_upcases_yes() {
    let mut p = prompter("yes\n");
    let (text, len) = p.read_bounded_line(4, CaseFold::Upper).unwrap();
    assert_eq!(text, "YES");
    assert_eq!(len, 3);
}

#[test]
fn prefix_compare_ignores_case_and_length() {
    assert_eq!(strncmp_ci("yes", "YES", 3), Ordering::Equal);
    // Only the first three characters are compared; the prompt checks length.
    assert_eq!(strncmp_ci("yess", "YES", 3), Ordering::Equal);
}

#[test]
fn yes_no_rejects_longer_answer() {
    let mut p = prompter("YESS\nno\n");
    assert!(!p.yes_no("Proceed?").unwrap());
    let (_, out) = p.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("There is no such option. Try again"));
}

#[test]
fn numbers_followed_by_garbage_are_rejected_wholesale() {
    let mut p = prompter("3.5 apples\n3.5\n");
    assert_eq!(p.read_f64().unwrap(), 3.5);
    let (_, out) = p.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("You have written a number and some inappropriate symbols after that. Try again"));
}

#[test]
fn precision_prompt_loops_on_negative() {
    let mut p = prompter("-1\nthree\n3\n");
    assert_eq!(p.ask_precision(MAX_PRECISION).unwrap(), 3);
    let (_, out) = p.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Write how many digits after the decimal point will be in the solution\n"));
    assert!(out.contains("three is not an integer not negative number. Try again"));
    assert!(out.contains("The number should not be negative. Try again"));
}
