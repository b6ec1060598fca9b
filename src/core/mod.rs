//! core
//!
//! Core domain types and operations for wordpass.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Letter, LetterSequence, Passphrase
//! - [`wordlist`] - Wordlist loading and length filtering
//! - [`generator`] - Passphrase generation
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Wordlist location resolution
//!
//! # Design Principles
//!
//! - No global state: the wordlist is loaded once and passed in
//! - Randomness is always a parameter
//! - All validation happens before any random draw

pub mod config;
pub mod generator;
pub mod paths;
pub mod types;
pub mod wordlist;
