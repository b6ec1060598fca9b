//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results go to stdout as a single line. Diagnostics go to stderr and are
//! only shown in debug mode. Fatal errors always go to stderr.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Normal mode - result line only
    Normal,
    /// Debug mode - diagnostics on stderr
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a result line.
pub fn print(message: impl Display) {
    println!("{}", message);
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print a recoverable failure on stdout, in place of the result line.
pub fn failure(message: impl Display) {
    println!("{}", format_failure(message));
}

/// Print a fatal error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a recoverable failure line.
pub fn format_failure(message: impl Display) -> String {
    format!("Error: {}", message)
}
