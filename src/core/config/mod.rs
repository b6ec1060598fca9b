//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! wordpass runs without any configuration. An optional TOML file can set
//! a persistent wordlist location.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. An explicit path passed with `--config` (must exist)
//! 2. `<config_dir>/wordpass/config.toml`
//! 3. `~/.wordpass/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use wordpass::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! if let Some(path) = config.wordlist() {
//!     println!("Wordlist: {}", path.display());
//! }
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed config values
    pub global: GlobalConfig,
    /// Path to the config file (if one was loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// With `explicit`, only that file is read and it must exist. Otherwise
    /// the standard locations are searched and the first existing file wins.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed, or if the
    /// explicit file is missing. Missing default files are not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => Self::load_first(&Self::default_locations()),
        }
    }

    /// Load the first existing file from `candidates`, or defaults.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::load_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Read, parse, and validate a single config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Standard config file locations, in search order.
    pub fn default_locations() -> Vec<PathBuf> {
        let mut locations = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            locations.push(dir.join("wordpass/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            locations.push(home.join(".wordpass/config.toml"));
        }
        locations
    }

    /// Path of the loaded config file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Configured wordlist location.
    ///
    /// Relative paths are resolved against the config file's directory.
    pub fn wordlist(&self) -> Option<PathBuf> {
        let wordlist = self.global.wordlist.as_ref()?;
        match self.path.as_ref().and_then(|p| p.parent()) {
            Some(dir) if wordlist.is_relative() => Some(dir.join(wordlist)),
            _ => Some(wordlist.clone()),
        }
    }
}
