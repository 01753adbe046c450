//! Developer traces on stderr, switched on with QUADRATIC_DEBUG=1 (or `true`).
//!
//! `debug_log!("solve", "D = {d}")` prints `[solve] D = ...` when enabled and
//! costs one cached flag check otherwise.
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

fn flag_from(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1") | Some("true") | Some("TRUE"))
}

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| flag_from(std::env::var("QUADRATIC_DEBUG").ok().as_deref()))
}

#[macro_export]
macro_rules! debug_log {
    ($target:literal, $($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() {
            eprintln!("[{}] {}", $target, format_args!($($arg)*));
        }
    }};
}
