//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All output goes through this module so the one-line-per-invocation
//! contract and the debug/normal split live in a single place.

pub mod output;
