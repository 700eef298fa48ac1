//! Candidate sources for coolmenu.
//!
//! The menu never reads the environment itself. It is handed a list of names by a
//! [CandidateSource], which has two operations:
//! - `load`: the fast path used at startup, may answer from the cache
//! - `refresh`: always rebuilds the list from scratch
//!
//! [PathSource] is the real source: it scans `PATH` and keeps the JSON cache current.

use crate::core::cache::{read_cache, write_cache};
use crate::core::scan::scan_path;
use crate::error::Result;

use std::ffi::OsString;
use std::path::PathBuf;

/// Where a loaded candidate list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Scan,
}

/// A candidate list together with its [Origin].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub items: Vec<String>,
    pub origin: Origin,
}

pub trait CandidateSource: Send + Sync {
    fn load(&self) -> Result<Candidates>;
    fn refresh(&self) -> Result<Vec<String>>;
}

/// Scans a PATH-style directory list, optionally backed by a cache file.
#[derive(Debug, Clone)]
pub struct PathSource {
    path_var: OsString,
    cache: Option<PathBuf>,
}

impl PathSource {
    pub fn new(path_var: OsString, cache: Option<PathBuf>) -> Self {
        Self { path_var, cache }
    }

    /// Source for the current process: `$PATH` and the default cache path.
    pub fn from_env(use_cache: bool) -> Self {
        let path_var = std::env::var_os("PATH").unwrap_or_default();
        let cache = if use_cache {
            crate::core::cache::default_cache_path()
        } else {
            None
        };
        Self::new(path_var, cache)
    }

    fn store(&self, items: &[String]) {
        if let Some(path) = &self.cache
            && let Err(e) = write_cache(path, items)
        {
            tracing::warn!(error = %e, "could not update cache");
        }
    }
}

impl CandidateSource for PathSource {
    fn load(&self) -> Result<Candidates> {
        if let Some(path) = &self.cache
            && path.exists()
        {
            match read_cache(path) {
                Ok(items) => {
                    tracing::debug!(count = items.len(), "loaded candidates from cache");
                    return Ok(Candidates {
                        items,
                        origin: Origin::Cache,
                    });
                }
                Err(e) => tracing::warn!(error = %e, "ignoring unusable cache"),
            }
        }

        let items = self.refresh()?;
        Ok(Candidates {
            items,
            origin: Origin::Scan,
        })
    }

    fn refresh(&self) -> Result<Vec<String>> {
        let items = scan_path(&self.path_var);
        self.store(&items);
        Ok(items)
    }
}
