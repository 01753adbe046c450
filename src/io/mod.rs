//! Terminal input: scanning helpers and the re-prompting reader.

pub mod reader;
pub mod text;

pub use reader::Prompter;
pub use text::{scan_number, strncmp_ci, CaseFold, Scanned};
