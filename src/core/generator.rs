//! core::generator
//!
//! Passphrase generation.
//!
//! # Modes
//!
//! - **Constrained**: the caller supplies letters; word *i* starts with
//!   letter *i*. Only the first [`WORD_COUNT`] letters are used.
//! - **Unconstrained**: the first letters of [`WORD_COUNT`] randomly sampled
//!   words become the constraint, then constrained generation runs.
//!
//! # Validation
//!
//! All checks run before the first random draw, in a fixed order:
//!
//! 1. Enough letters were supplied
//! 2. The filtered word set has at least [`WORD_COUNT`] words
//! 3. Every used letter has at least one matching word, checked in sequence
//!    order
//!
//! A failure is therefore the same for every random source.
//!
//! # Output
//!
//! `Word-Word-Word-Word-Word` followed by one character from
//! [`SPECIAL_CHARS`] and one decimal digit, e.g. `Lemon-Uncle-Cabin-Amber-Sugar&4`.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use wordpass::core::generator::generate;
//! use wordpass::core::types::LetterSequence;
//! use wordpass::core::wordlist::{Wordlist, MIN_WORD_LENGTH};
//!
//! let words = Wordlist::from_words(["alpha", "bravo", "charlie", "delta", "eagle"])
//!     .filtered(MIN_WORD_LENGTH);
//! let letters: LetterSequence = "e,d,c,b,a".parse().unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let passphrase = generate(&words, Some(&letters), &mut rng).unwrap();
//! assert!(passphrase.as_str().starts_with("Eagle-Delta-Charlie-Bravo-Alpha"));
//! ```

use rand::seq::{index, IndexedRandom};
use rand::Rng;
use thiserror::Error;

use super::types::{Letter, LetterSequence, Passphrase};
use super::wordlist::{Wordlist, MIN_WORD_LENGTH};

/// Number of words in a passphrase.
pub const WORD_COUNT: usize = 5;

/// Separator placed between words.
pub const SEPARATOR: &str = "-";

/// Characters the trailing special character is drawn from.
pub const SPECIAL_CHARS: [char; 26] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}', '|',
    ';', ':', ',', '.', '<', '>', '?',
];

/// Errors from passphrase generation.
///
/// These are recoverable: the CLI prints them as `Error: <message>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Fewer letters than words were requested.
    #[error(
        "Need at least {required} letters to generate a {required}-word password (got {got})."
    )]
    InsufficientLetters { got: usize, required: usize },

    /// No word in the filtered set starts with this letter.
    #[error("No words of length {min_length}+ start with '{letter}'.")]
    NoMatchingWord { letter: Letter, min_length: usize },

    /// The filtered set cannot fill a passphrase.
    #[error("Need at least {required} words of length {min_length}+ in the wordlist (found {found}).")]
    WordlistTooSmall {
        found: usize,
        required: usize,
        min_length: usize,
    },
}

/// Generate a passphrase from a filtered word set.
///
/// With `letters`, runs constrained generation; without, picks the letters
/// at random from the word set.
///
/// # Errors
///
/// See [`GenerateError`]. No random value is drawn when an error is returned.
pub fn generate<R: Rng + ?Sized>(
    words: &Wordlist,
    letters: Option<&LetterSequence>,
    rng: &mut R,
) -> Result<Passphrase, GenerateError> {
    match letters {
        Some(letters) => generate_constrained(words, letters, rng),
        None => generate_unconstrained(words, rng),
    }
}

/// Generate a passphrase with one word per requested letter.
///
/// Letters past the first [`WORD_COUNT`] are ignored. Each slot is chosen
/// independently, so the same word can appear twice when two letters match it.
pub fn generate_constrained<R: Rng + ?Sized>(
    words: &Wordlist,
    letters: &LetterSequence,
    rng: &mut R,
) -> Result<Passphrase, GenerateError> {
    let letters = validate(words, letters)?;

    let mut chosen = Vec::with_capacity(WORD_COUNT);
    for &letter in letters {
        chosen.push(pick_word(words, letter, rng)?);
    }

    Ok(assemble(&chosen, rng))
}

/// Generate a passphrase from randomly chosen starting letters.
///
/// Samples [`WORD_COUNT`] distinct positions in the word set and uses the
/// first letter of each word there. Letters may repeat.
pub fn generate_unconstrained<R: Rng + ?Sized>(
    words: &Wordlist,
    rng: &mut R,
) -> Result<Passphrase, GenerateError> {
    ensure_enough_words(words)?;

    let letters: LetterSequence = index::sample(rng, words.len(), WORD_COUNT)
        .iter()
        .filter_map(|i| Letter::of_word(&words.words()[i]))
        .collect();

    generate_constrained(words, &letters, rng)
}

/// Check the constraints and return the letters that will be used.
fn validate<'a>(
    words: &Wordlist,
    letters: &'a LetterSequence,
) -> Result<&'a [Letter], GenerateError> {
    if letters.len() < WORD_COUNT {
        return Err(GenerateError::InsufficientLetters {
            got: letters.len(),
            required: WORD_COUNT,
        });
    }

    ensure_enough_words(words)?;

    let used = &letters.as_slice()[..WORD_COUNT];
    if let Some(&letter) = used
        .iter()
        .find(|l| !words.words().iter().any(|w| l.starts(w)))
    {
        return Err(GenerateError::NoMatchingWord {
            letter,
            min_length: MIN_WORD_LENGTH,
        });
    }

    Ok(used)
}

fn ensure_enough_words(words: &Wordlist) -> Result<(), GenerateError> {
    if words.len() < WORD_COUNT {
        return Err(GenerateError::WordlistTooSmall {
            found: words.len(),
            required: WORD_COUNT,
            min_length: MIN_WORD_LENGTH,
        });
    }
    Ok(())
}

/// Choose one word starting with `letter`, uniformly.
fn pick_word<'w, R: Rng + ?Sized>(
    words: &'w Wordlist,
    letter: Letter,
    rng: &mut R,
) -> Result<&'w str, GenerateError> {
    let candidates: Vec<&str> = words
        .words()
        .iter()
        .map(String::as_str)
        .filter(|w| letter.starts(w))
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or(GenerateError::NoMatchingWord {
            letter,
            min_length: MIN_WORD_LENGTH,
        })
}

/// Capitalize and join the words, then append a special character and a digit.
fn assemble<R: Rng + ?Sized>(words: &[&str], rng: &mut R) -> Passphrase {
    let base = words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let special = SPECIAL_CHARS[rng.random_range(0..SPECIAL_CHARS.len())];
    let digit: u8 = rng.random_range(0..10);

    Passphrase::new(format!("{}{}{}", base, special, digit))
}

/// Uppercase the first character and leave the rest unchanged.
///
/// ```
/// use wordpass::core::generator::capitalize;
///
/// assert_eq!(capitalize("lucas"), "Lucas");
/// assert_eq!(capitalize("mcDonald"), "McDonald");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Estimated entropy in bits of an unconstrained passphrase drawn from a
/// filtered set of `word_count` words.
pub fn search_space_bits(word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    WORD_COUNT as f64 * (word_count as f64).log2()
        + (SPECIAL_CHARS.len() as f64).log2()
        + 10f64.log2()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// RNG that fails the test if any value is drawn.
    struct NoDrawRng;

    impl RngCore for NoDrawRng {
        fn next_u32(&mut self) -> u32 {
            panic!("random value drawn")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("random value drawn")
        }

        fn fill_bytes(&mut self, _dst: &mut [u8]) {
            panic!("random value drawn")
        }
    }

    fn words(list: &[&str]) -> Wordlist {
        Wordlist::from_words(list).filtered(MIN_WORD_LENGTH)
    }

    fn letters(s: &str) -> LetterSequence {
        s.parse().unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn segments(passphrase: &Passphrase) -> (Vec<String>, char, char) {
        let s = passphrase.as_str();
        let chars: Vec<char> = s.chars().collect();
        let digit = chars[chars.len() - 1];
        let special = chars[chars.len() - 2];
        let body: String = chars[..chars.len() - 2].iter().collect();
        let words = body.split(SEPARATOR).map(str::to_string).collect();
        (words, special, digit)
    }

    const NATO: &[&str] = &[
        "alpha", "bravo", "charlie", "delta", "eagle", "foxtrot", "grape", "lucas",
    ];

    mod constrained {
        use super::*;

        #[test]
        fn one_word_per_letter_in_order() {
            let words = words(NATO);
            let p = generate(&words, Some(&letters("a,b,c,d,e")), &mut rng()).unwrap();
            let (segs, special, digit) = segments(&p);

            assert_eq!(segs, vec!["Alpha", "Bravo", "Charlie", "Delta", "Eagle"]);
            assert!(SPECIAL_CHARS.contains(&special));
            assert!(digit.is_ascii_digit());
        }

        #[test]
        fn extra_letters_are_ignored() {
            let words = words(NATO);
            let p = generate(&words, Some(&letters("a,b,c,d,e,x")), &mut rng()).unwrap();
            let (segs, _, _) = segments(&p);
            assert_eq!(segs.len(), WORD_COUNT);
            assert_eq!(segs[4], "Eagle");
        }

        #[test]
        fn unparsed_extra_entries_ignored() {
            let words = words(NATO);
            for input in ["a,b,c,d,e,xyz", "a,b,c,d,e,"] {
                let p = generate(&words, Some(&letters(input)), &mut rng()).unwrap();
                assert!(p.as_str().starts_with("Alpha-Bravo-Charlie-Delta-Eagle"));
            }
        }

        #[test]
        fn uppercase_letters_match() {
            let words = words(NATO);
            let p = generate(&words, Some(&letters("A,B,C,D,E")), &mut rng()).unwrap();
            assert!(p.as_str().starts_with("Alpha-Bravo-Charlie-Delta-Eagle"));
        }

        #[test]
        fn matches_capitalized_source_words() {
            let words = words(&["Alpha", "bravo", "charlie", "delta", "eagle"]);
            let p = generate(&words, Some(&letters("a,b,c,d,e")), &mut rng()).unwrap();
            assert!(p.as_str().starts_with("Alpha-Bravo"));
        }

        #[test]
        fn same_word_may_fill_several_slots() {
            let words = words(NATO);
            let p = generate(&words, Some(&letters("a,a,a,a,a")), &mut rng()).unwrap();
            let (segs, _, _) = segments(&p);
            assert!(segs.iter().all(|s| s == "Alpha"));
        }

        #[test]
        fn too_few_letters() {
            let words = words(NATO);
            let err = generate(&words, Some(&letters("a,b")), &mut NoDrawRng).unwrap_err();
            assert_eq!(
                err,
                GenerateError::InsufficientLetters {
                    got: 2,
                    required: WORD_COUNT
                }
            );
            assert_eq!(
                err.to_string(),
                "Need at least 5 letters to generate a 5-word password (got 2)."
            );
        }

        #[test]
        fn empty_sequence_is_too_few_letters() {
            let words = words(NATO);
            let err = generate(&words, Some(&LetterSequence::default()), &mut NoDrawRng)
                .unwrap_err();
            assert!(matches!(err, GenerateError::InsufficientLetters { got: 0, .. }));
        }

        #[test]
        fn unmatched_letter_is_named() {
            let words = words(NATO);
            let err = generate(&words, Some(&letters("q,u,a,c,k")), &mut NoDrawRng).unwrap_err();
            assert_eq!(err.to_string(), "No words of length 5+ start with 'q'.");
        }

        #[test]
        fn first_unmatched_letter_in_order_is_reported() {
            let words = words(NATO);
            let err = generate(&words, Some(&letters("a,z,b,q,c")), &mut NoDrawRng).unwrap_err();
            assert_eq!(
                err,
                GenerateError::NoMatchingWord {
                    letter: Letter::new('z'),
                    min_length: MIN_WORD_LENGTH
                }
            );
        }

        #[test]
        fn short_words_do_not_match() {
            // "echo" is filtered out, so 'e' has no candidate
            let words = words(&["alpha", "bravo", "charlie", "delta", "echo", "lucas"]);
            let err = generate(&words, Some(&letters("a,b,c,d,e")), &mut NoDrawRng).unwrap_err();
            assert_eq!(err.to_string(), "No words of length 5+ start with 'e'.");
        }

        #[test]
        fn small_wordlist_fails() {
            let words = words(&["apple", "apron"]);
            let err = generate(&words, Some(&letters("a,a,a,a,a")), &mut NoDrawRng).unwrap_err();
            assert_eq!(
                err,
                GenerateError::WordlistTooSmall {
                    found: 2,
                    required: WORD_COUNT,
                    min_length: MIN_WORD_LENGTH
                }
            );
        }
    }

    mod unconstrained {
        use super::*;

        #[test]
        fn produces_five_capitalized_words() {
            let words = words(NATO);
            let p = generate(&words, None, &mut rng()).unwrap();
            let (segs, special, digit) = segments(&p);

            assert_eq!(segs.len(), WORD_COUNT);
            for seg in &segs {
                assert!(seg.chars().next().unwrap().is_uppercase());
                assert!(words.words().contains(&seg.to_lowercase()));
            }
            assert!(SPECIAL_CHARS.contains(&special));
            assert!(digit.is_ascii_digit());
        }

        #[test]
        fn exactly_five_words_suffice() {
            let words = words(&["amber", "birch", "cedar", "maple", "olive"]);
            assert!(generate(&words, None, &mut rng()).is_ok());
        }

        #[test]
        fn fewer_than_five_words_fails() {
            let words = words(&["amber", "birch", "cedar", "maple", "oak"]);
            let err = generate(&words, None, &mut NoDrawRng).unwrap_err();
            assert!(matches!(
                err,
                GenerateError::WordlistTooSmall { found: 4, .. }
            ));
        }

        #[test]
        fn same_seed_same_output() {
            let words = words(NATO);
            let a = generate(&words, None, &mut StdRng::seed_from_u64(9)).unwrap();
            let b = generate(&words, None, &mut StdRng::seed_from_u64(9)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn capitalize_leaves_rest_unchanged() {
        assert_eq!(capitalize("alpha"), "Alpha");
        assert_eq!(capitalize("aLPHA"), "ALPHA");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn special_chars_are_distinct() {
        let mut sorted = SPECIAL_CHARS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 26);
    }

    #[test]
    fn search_space_grows_with_wordlist() {
        assert_eq!(search_space_bits(0), 0.0);
        let small = search_space_bits(100);
        let large = search_space_bits(7776);
        assert!(large > small);
        // 5 * log2(7776) + log2(260) ≈ 72.6
        assert!((large - 72.65).abs() < 0.1);
    }
}
