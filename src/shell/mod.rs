//! The interactive session: optional self-test, then solve equations until
//! the user says no.

pub mod report;

use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::core::compare::Comparator;
use crate::core::selftest::{self, FIXTURES};
use crate::core::solver::{solve_with, Solution};
use crate::debug_log;
use crate::io::Prompter;

pub use report::{describe, needs_precision, MAX_PRECISION};

pub fn start(settings: &Settings) -> anyhow::Result<()> {
    // stdout stays unlocked so the Ctrl-C handler can still print.
    let mut session = Session::new(io::stdin().lock(), io::stdout(), settings);
    session.run()?;
    Ok(())
}

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    cmp: Comparator,
    ask_unit_tests: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            cmp: settings.comparator(),
            ask_unit_tests: settings.ask_unit_tests,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_inner().1
    }

    /// Runs to completion. Closed input ends the session like a "no".
    pub fn run(&mut self) -> io::Result<()> {
        match self.interact() {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                debug_log!("session", "input closed");
                writeln!(self.prompter.output())?;
            }
            Err(e) => return Err(e),
        }
        writeln!(self.prompter.output(), "Good bye!")?;
        self.prompter.output().flush()
    }

    fn interact(&mut self) -> io::Result<()> {
        if self.ask_unit_tests {
            self.offer_unit_tests()?;
        }

        writeln!(self.prompter.output(), "This program will solve quadratic equations")?;
        loop {
            self.solve_one()?;
            let again = self.prompter.yes_no("Do you want to solve another equation?\n")?;
            writeln!(self.prompter.output())?;
            if !again {
                return Ok(());
            }
        }
    }

    /// Asks whether to run the built-in table; returns the failure count.
    pub fn offer_unit_tests(&mut self) -> io::Result<usize> {
        let mut failed = 0;
        if self.prompter.yes_no("Do you want to run unit test?\n")? {
            failed = selftest::report(self.prompter.output(), &self.cmp, &FIXTURES)?;
        }
        writeln!(self.prompter.output())?;
        Ok(failed)
    }

    pub fn solve_one(&mut self) -> io::Result<Solution> {
        writeln!(
            self.prompter.output(),
            "Write coefficients \"a\", \"b\" and \"c\"\n"
        )?;
        let coeffs = self.prompter.read_coefficients()?;
        let solution = solve_with(&self.cmp, coeffs);
        debug_log!("session", "{coeffs:?} -> {solution:?}");

        let digits = if needs_precision(&solution) {
            self.prompter.ask_precision(MAX_PRECISION)?
        } else {
            0
        };
        writeln!(self.prompter.output(), "{}\n", describe(&solution, digits))?;
        Ok(solution)
    }
}
