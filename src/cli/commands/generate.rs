//! generate command - Print a passphrase

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::cli::{Context, EXIT_GENERATION_FAILED};
use crate::core::config::Config;
use crate::core::generator::{self, search_space_bits};
use crate::core::paths::resolve_wordlist;
use crate::core::types::LetterSequence;
use crate::core::wordlist::{Wordlist, MIN_WORD_LENGTH};
use crate::ui::output::{self, Verbosity};

/// Generate and print a passphrase.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `letters` - Starting letters, or `None` for random words
///
/// # Errors
///
/// Config and wordlist problems are fatal and returned as errors.
/// Generation failures are printed as `Error: ...` and reported through
/// the exit code.
pub fn generate(ctx: &Context, letters: Option<&LetterSequence>) -> Result<ExitCode> {
    let verbosity = Verbosity::from_flags(ctx.debug);

    let config = Config::load(ctx.config.as_deref()).context("Failed to load configuration")?;
    if let Some(path) = config.path() {
        output::debug(format!("config: {}", path.display()), verbosity);
    }

    let configured = config.wordlist();
    let path = resolve_wordlist(ctx.wordlist.as_deref(), configured.as_deref())?;
    output::debug(format!("wordlist: {}", path.display()), verbosity);

    let all = Wordlist::load(&path)?;
    let words = all.filtered(MIN_WORD_LENGTH);
    output::debug(
        format!(
            "{} words, {} with {}+ characters (~{:.1} bits)",
            all.len(),
            words.len(),
            MIN_WORD_LENGTH,
            search_space_bits(words.len())
        ),
        verbosity,
    );

    let mut rng: Box<dyn RngCore> = match ctx.seed {
        Some(seed) => {
            output::debug(format!("seed: {}", seed), verbosity);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::rng()),
    };

    if let Some(letters) = letters {
        output::debug(format!("letters: {}", letters), verbosity);
    }

    match generator::generate(&words, letters, &mut *rng) {
        Ok(passphrase) => {
            output::print(passphrase);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            output::failure(&err);
            Ok(ExitCode::from(EXIT_GENERATION_FAILED))
        }
    }
}
