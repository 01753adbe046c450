use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "quadratic",
    about = "Solve linear and quadratic equations a·x² + b·x + c = 0 interactively",
    version
)]
pub struct QuadCli {
    /// Path to settings (TOML); default: ~/.quadratic/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Plain diagnostics without ANSI colors
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Skip the "run unit test?" question at startup
    #[arg(long = "no-unit-tests", action = ArgAction::SetTrue)]
    pub no_unit_tests: bool,
}
