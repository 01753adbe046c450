//! quadratic — interactive solver for a·x² + b·x + c = 0.

use std::io::IsTerminal;

use clap::Parser; // trait import enables QuadCli::parse()

use quadratic_solver::cli::QuadCli;
use quadratic_solver::config::Settings;
use quadratic_solver::{debug_log, shell};

fn set_console_title() {
    use crossterm::{execute, terminal::SetTitle};
    if std::io::stdout().is_terminal() {
        let _ = execute!(std::io::stdout(), SetTitle("Quadratic Solver"));
    }
}

fn install_interrupt_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        println!("\nGood bye!");
        std::process::exit(0);
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = QuadCli::parse();

    let mut settings = Settings::load(&args.config)?;
    if args.no_color || !settings.color {
        colored::control::set_override(false);
    }
    if args.no_unit_tests {
        settings.ask_unit_tests = false;
    }
    debug_log!("main", "{settings:?}");

    set_console_title();
    install_interrupt_handler()?;

    shell::start(&settings)
}
