//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Letter`] - A single lowercase starting letter
//! - [`LetterSequence`] - Ordered letters, one per requested word
//! - [`Passphrase`] - A generated passphrase
//!
//! # Validation
//!
//! These types enforce validity at construction time. A `Letter` is always
//! exactly one lowercase character, so the generator never has to deal with
//! empty or multi-character prefixes.
//!
//! Only the first [`WORD_COUNT`] entries of a parsed `LetterSequence` are
//! validated. Later entries are counted but never used.
//!
//! # Examples
//!
//! ```
//! use wordpass::core::types::{Letter, LetterSequence};
//!
//! let letters: LetterSequence = "L,u,c,a,s".parse().unwrap();
//! assert_eq!(letters.len(), 5);
//! assert_eq!(letters.as_slice()[0], Letter::new('l'));
//!
//! let extra: LetterSequence = "l,u,c,a,s,xyz,".parse().unwrap();
//! assert_eq!(extra.len(), 7);
//! assert_eq!(extra.as_slice().len(), 5);
//!
//! assert!("".parse::<LetterSequence>().unwrap().is_empty());
//! assert!("l,,c".parse::<LetterSequence>().is_err());
//! assert!("lu,c".parse::<LetterSequence>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::generator::WORD_COUNT;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid letter '{0}': expected exactly one character")]
    InvalidLetter(String),
}

/// A single starting letter, normalized to lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    /// Create a letter from a character, lowercasing it.
    ///
    /// Characters whose lowercase form expands to several characters keep
    /// only the first one.
    pub fn new(c: char) -> Self {
        Self(c.to_lowercase().next().unwrap_or(c))
    }

    /// The letter a word starts with, if the word is non-empty.
    pub fn of_word(word: &str) -> Option<Self> {
        word.chars().next().map(Self::new)
    }

    /// Get the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }

    /// Check whether a word starts with this letter, ignoring case.
    pub fn starts(self, word: &str) -> bool {
        Self::of_word(word) == Some(self)
    }
}

impl FromStr for Letter {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::new(c)),
            _ => Err(TypeError::InvalidLetter(s.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered letters supplied by the caller, one per desired word.
///
/// The sequence may be any length; the generator decides whether it is long
/// enough and ignores letters past the word count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterSequence {
    letters: Vec<Letter>,
    /// Parsed entries past the word count, kept only for `len`
    ignored: usize,
}

impl LetterSequence {
    /// Create a sequence from letters.
    pub fn new(letters: Vec<Letter>) -> Self {
        Self {
            letters,
            ignored: 0,
        }
    }

    /// Number of letters supplied, including ignored trailing entries.
    pub fn len(&self) -> usize {
        self.letters.len() + self.ignored
    }

    /// Check if no letters were supplied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the usable letters in order.
    pub fn as_slice(&self) -> &[Letter] {
        &self.letters
    }
}

impl FromIterator<Letter> for LetterSequence {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for LetterSequence {
    type Err = TypeError;

    /// Parse a comma-separated list such as `l,u,c,a,s`.
    ///
    /// A blank string is an empty sequence. Entries past the word count are
    /// not validated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut entries = s.split(',');
        let letters = entries
            .by_ref()
            .take(WORD_COUNT)
            .map(str::parse::<Letter>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            letters,
            ignored: entries.count(),
        })
    }
}

impl fmt::Display for LetterSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .letters
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{}", joined)?;
        if self.ignored > 0 {
            write!(f, " (+{} ignored)", self.ignored)?;
        }
        Ok(())
    }
}

/// A generated passphrase.
///
/// `Debug` output is redacted. Use [`Passphrase::as_str`] or `Display` to
/// print it.
#[derive(Clone, PartialEq, Eq)]
pub struct Passphrase(String);

impl Passphrase {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Get the passphrase text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the passphrase text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
