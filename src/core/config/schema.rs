//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `--config <path>` if given
//! 2. `<config_dir>/wordpass/config.toml` (`$XDG_CONFIG_HOME` on Linux)
//! 3. `~/.wordpass/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing. Unknown keys are rejected so
//! typos surface instead of being ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// wordlist = "/usr/share/dict/eff_large_wordlist.txt"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Wordlist file used when `--wordlist` is not given
    pub wordlist: Option<PathBuf>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.wordlist {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "wordlist path cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
