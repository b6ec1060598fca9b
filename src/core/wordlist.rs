//! core::wordlist
//!
//! Wordlist loading and length filtering.
//!
//! # Format
//!
//! A wordlist is a UTF-8 text file with one word per line. Surrounding
//! whitespace is trimmed and blank lines are skipped. No header is required
//! and the trailing newline is optional. Word content (case, character set)
//! is not validated.
//!
//! # Lifetime
//!
//! A [`Wordlist`] is loaded once by the CLI and passed by reference to the
//! generator. It is never mutated after construction.
//!
//! # Example
//!
//! ```
//! use wordpass::core::wordlist::{Wordlist, MIN_WORD_LENGTH};
//!
//! let list = Wordlist::from_words(["alpha", " bravo ", "", "fox"]);
//! assert_eq!(list.words(), ["alpha", "bravo", "fox"]);
//!
//! let filtered = list.filtered(MIN_WORD_LENGTH);
//! assert_eq!(filtered.words(), ["alpha", "bravo"]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Minimum number of characters a word needs to be used in a passphrase.
pub const MIN_WORD_LENGTH: usize = 5;

/// Errors from wordlist loading.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("failed to read wordlist '{path}': {source}")]
    Unavailable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// An ordered, immutable list of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Load a wordlist from a file.
    ///
    /// # Errors
    ///
    /// Returns `WordlistError::Unavailable` if the file is missing,
    /// unreadable, or not valid UTF-8.
    pub fn load(path: &Path) -> Result<Self, WordlistError> {
        let contents = fs::read_to_string(path).map_err(|e| WordlistError::Unavailable {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::parse(&contents))
    }

    /// Parse wordlist text, one word per line.
    pub fn parse(contents: &str) -> Self {
        Self::from_words(contents.lines())
    }

    /// Build a wordlist from in-memory words, applying the same trimming
    /// rules as [`Wordlist::load`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Borrow the words in file order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Return a new list keeping only words of at least `min_length`
    /// characters.
    pub fn filtered(&self, min_length: usize) -> Self {
        Self {
            words: filter_by_length(&self.words, min_length),
        }
    }
}

/// Keep the words that are at least `min_length` characters long.
///
/// Length is counted in characters, not bytes. Order is preserved, so
/// filtering an already filtered list returns it unchanged.
pub fn filter_by_length<S: AsRef<str>>(words: &[S], min_length: usize) -> Vec<String> {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| w.chars().count() >= min_length)
        .map(str::to_string)
        .collect()
}
