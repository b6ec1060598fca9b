//! man command - Explain the passphrase method

use anyhow::Result;

/// Static explanation printed by `--man`.
pub const MAN_TEXT: &str = "\
The XKCD Password Method

Comic #936 (https://xkcd.com/936/) points out that a handful of random,
common words beats a short string of symbols: \"Jungle-Tornado-Silver-Galaxy-Puzzle\"
is easy to remember and far harder to guess than \"Tr0ub4dor&3\".

Why it works:
- People remember words and little stories, not random characters.
- Against brute force, length counts for more than character variety.
- Words are picked at random, so the phrase carries real entropy.

What wordpass generates:
- Words: taken from the wordlist, keeping only words of 5+ letters.
- Scheme: 5 words, first letter capitalized, joined with '-', then
  1 special character (26 options) and 1 digit (10 options).
- Search space with a 7,776-word list: 7,776^5 * 26 * 10, about 7.4 * 10^21
  (roughly 72 bits).
- Offline at 100 billion guesses per second that is about 7.4 * 10^10
  seconds, or some 2,300 years.
- With --letters, each slot only draws from words starting with that letter,
  so a chosen-letter passphrase is weaker than a fully random one.

The usual risks are reuse and phishing, not brute force.";

/// Print the method explanation.
pub fn man() -> Result<()> {
    println!("{}", MAN_TEXT);
    Ok(())
}
