//! Error type for the fallible collaborators of coolmenu.
//!
//! The matcher and the menu state machine never fail. Everything that touches the
//! environment (PATH scanning, the candidate cache, launching the chosen command)
//! returns [Result] with an [Error] from this module.

use std::io;
use std::path::PathBuf;

/// Errors raised by the candidate source, the cache and the launcher.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("cache file {path:?} could not be used: {source}")]
    Cache {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cache contents are not a list of names: {0}")]
    Json(#[from] serde_json::Error),

    #[error("command '{0}' was not found in PATH")]
    NotFound(String),

    #[error("failed to launch '{command}': {source}")]
    Exec {
        command: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
