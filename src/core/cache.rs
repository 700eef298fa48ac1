//! Candidate cache for coolmenu.
//!
//! The cache is a JSON array of executable names. It lives at `COOLMENU_CACHE` if set,
//! otherwise at `coolmenu.json` inside the user cache directory (`~/.cache` on Linux).
//! Writes go to a temporary sibling file first and are renamed into place.

use crate::error::{Error, Result};

use std::fs;
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = "coolmenu.json";

/// Determine the cache file path.
/// Checks the COOLMENU_CACHE environment variable first, then the platform cache dir.
pub fn default_cache_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("COOLMENU_CACHE") {
        return Some(PathBuf::from(path));
    }
    dirs::cache_dir().map(|dir| dir.join(CACHE_FILE_NAME))
}

/// Reads the cached candidate list.
pub fn read_cache(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Cache {
        path: path.to_path_buf(),
        source,
    })?;
    let items = serde_json::from_str(&content)?;
    Ok(items)
}

/// Writes the candidate list, creating parent directories as needed.
pub fn write_cache(path: &Path, items: &[String]) -> Result<()> {
    let cache_err = |source: std::io::Error| Error::Cache {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(cache_err)?;
    }
    let content = serde_json::to_string(items)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content).map_err(cache_err)?;
    fs::rename(&tmp, path).map_err(cache_err)?;

    tracing::debug!(path = %path.display(), count = items.len(), "wrote cache");
    Ok(())
}
