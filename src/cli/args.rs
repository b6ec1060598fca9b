//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--letters` / `-l <a,b,c,d,e>`: One word per letter
//! - `--man` / `-m`: Explain the method and exit
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--wordlist` / `-w <path>`: Use a different wordlist
//! - `--config <path>`: Use a specific config file
//! - `--completions <shell>`: Print a completion script
//! - `--debug`: Enable debug logging

use clap::Parser;
use std::path::PathBuf;

use crate::core::types::LetterSequence;

/// wordpass - Generate memorable XKCD-style passphrases
#[derive(Parser, Debug)]
#[command(name = "wordpass")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Five random words
    wordpass

    # One word per letter, in order
    wordpass -l l,u,c,a,s

    # How strong is this?
    wordpass --man")]
pub struct Cli {
    /// Comma-separated letters to pick words by (e.g. 'l,u,c,a,s'). One word per letter
    #[arg(short, long, value_name = "LETTERS")]
    pub letters: Option<LetterSequence>,

    /// Explain the XKCD method and password complexity
    #[arg(short, long)]
    pub man: bool,

    /// Wordlist file (one word per line)
    #[arg(short, long, value_name = "PATH")]
    pub wordlist: Option<PathBuf>,

    /// Config file to use instead of the default locations
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Seed the random generator (reproducible output, for testing only)
    #[arg(long, hide = true)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Letters to generate from, or `None` for random words.
    ///
    /// An empty `--letters` value counts as no letters.
    pub fn letters(&self) -> Option<&LetterSequence> {
        self.letters.as_ref().filter(|l| !l.is_empty())
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
