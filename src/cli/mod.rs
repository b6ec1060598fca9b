//! cli
//!
//! Command-line interface layer for wordpass.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Dispatch to help, man text, completions, or generation
//! - Map outcomes to exit codes
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Passphrase printed, or informational output shown |
//! | 1 | Generation failed (`Error: ...` printed on stdout) |
//! | 2 | Fatal error: wordlist/config unavailable, or invalid usage |
//!
//! Generation failures replace the passphrase on stdout. Fatal errors are
//! not a result, so they go to stderr as `error: ...` and stdout stays empty.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code for a recoverable generation failure.
pub const EXIT_GENERATION_FAILED: u8 = 1;

/// Exit code for fatal errors. Matches clap's usage-error code.
pub const EXIT_FATAL: u8 = 2;

/// Execution context built from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Wordlist override.
    pub wordlist: Option<PathBuf>,
    /// Config file override.
    pub config: Option<PathBuf>,
    /// Fixed seed for the random generator.
    pub seed: Option<u64>,
}

impl From<&Cli> for Context {
    fn from(cli: &Cli) -> Self {
        Self {
            debug: cli.debug,
            wordlist: cli.wordlist.clone(),
            config: cli.config.clone(),
            seed: cli.seed,
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    let ctx = Context::from(&cli);
    commands::dispatch(&cli, &ctx)
}
