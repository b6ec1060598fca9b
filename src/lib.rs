//! wordpass - Memorable XKCD-style passphrases
//!
//! wordpass picks five words from a wordlist, optionally one per
//! caller-chosen letter, capitalizes them, joins them with `-`, and appends
//! a special character and a digit: `Lemon-Uncle-Cabin-Amber-Sugar&4`.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, prints results)
//! - [`core`] - Wordlist loading, filtering, and generation
//! - [`ui`] - Output formatting
//!
//! # Library Use
//!
//! ```
//! use wordpass::core::generator::generate;
//! use wordpass::core::wordlist::{Wordlist, MIN_WORD_LENGTH};
//!
//! let words = Wordlist::parse("amber\nbirch\ncedar\nmaple\nolive\noak\n")
//!     .filtered(MIN_WORD_LENGTH);
//! let passphrase = generate(&words, None, &mut rand::rng()).unwrap();
//! assert!(passphrase.as_str().matches('-').count() >= 4);
//! ```

pub mod cli;
pub mod core;
pub mod ui;
