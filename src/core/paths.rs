//! core::paths
//!
//! Centralized path routing for wordpass files.
//!
//! # Wordlist Location
//!
//! The wordlist is resolved in this order:
//! 1. An explicit path (the `--wordlist` flag)
//! 2. The `wordlist` key in the config file
//! 3. `words.txt` next to the installed executable
//!
//! The default is relative to the install location, never to the caller's
//! working directory. Symlinks to the executable are resolved first, so a
//! binary linked into `~/.local/bin` still finds the list beside its real
//! location.
//!
//! # Example
//!
//! ```
//! use wordpass::core::paths::{resolve_wordlist, WORDLIST_FILE};
//! use std::path::{Path, PathBuf};
//!
//! let explicit = resolve_wordlist(Some(Path::new("/tmp/list.txt")), None).unwrap();
//! assert_eq!(explicit, PathBuf::from("/tmp/list.txt"));
//!
//! let default = resolve_wordlist(None, None).unwrap();
//! assert!(default.ends_with(WORDLIST_FILE));
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name of the default wordlist.
pub const WORDLIST_FILE: &str = "words.txt";

/// Errors from path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("cannot determine install directory: {0}")]
    NoInstallDir(String),
}

/// Resolve the wordlist path from an explicit override, a configured path,
/// or the install directory.
pub fn resolve_wordlist(
    explicit: Option<&Path>,
    configured: Option<&Path>,
) -> Result<PathBuf, PathError> {
    if let Some(path) = explicit.or(configured) {
        return Ok(path.to_path_buf());
    }
    Ok(install_dir()?.join(WORDLIST_FILE))
}

/// Directory holding the running executable, with symlinks resolved.
pub fn install_dir() -> Result<PathBuf, PathError> {
    let exe = std::env::current_exe().map_err(|e| PathError::NoInstallDir(e.to_string()))?;
    let exe = exe.canonicalize().unwrap_or(exe);

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| PathError::NoInstallDir(format!("'{}' has no parent", exe.display())))
}
