//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! wordpass has no subcommands. Flags select one behavior, in this order:
//! 1. `--completions` prints a completion script
//! 2. `--man` prints the method explanation
//! 3. Otherwise a passphrase is generated
//!
//! `--help` and `--version` are handled by clap before dispatch.

mod completion;
mod generate;
mod man;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use generate::generate;
pub use man::{man, MAN_TEXT};

use super::{Cli, Context};
use anyhow::Result;
use std::process::ExitCode;

/// Dispatch parsed arguments to a handler.
pub fn dispatch(cli: &Cli, ctx: &Context) -> Result<ExitCode> {
    if let Some(shell) = cli.completions {
        completion(shell)?;
        return Ok(ExitCode::SUCCESS);
    }

    if cli.man {
        man()?;
        return Ok(ExitCode::SUCCESS);
    }

    generate(ctx, cli.letters())
}
