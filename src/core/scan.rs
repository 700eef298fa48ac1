//! PATH scanning for coolmenu.
//!
//! [scan_path] walks every directory of a PATH-style list and collects the names of the
//! executable files it finds. The first occurrence of a name wins, and the result is
//! sorted alphabetically.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Unix permission bits that mark a file as executable by someone.
#[cfg(unix)]
const EXEC_FLAG: u32 = 0o111;

/// Collects the unique executable names found in the directories of `path_var`.
///
/// Missing or unreadable directories are skipped.
pub fn scan_path(path_var: &OsStr) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for dir in std::env::split_paths(path_var) {
        if !dir.is_dir() {
            continue;
        }
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                continue;
            }
        };

        for entry in entries.flatten() {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if seen.contains(&name) || !is_executable_file(&entry.path()) {
                continue;
            }
            seen.insert(name.clone());
            result.push(name);
        }
    }

    result.sort();
    tracing::debug!(count = result.len(), "scanned PATH");
    result
}

/// Returns true for regular files (after following symlinks) that can be executed.
fn is_executable_file(path: &Path) -> bool {
    let Ok(meta) = fs::metadata(path) else {
        return false;
    };
    if !meta.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & EXEC_FLAG != 0
    }

    #[cfg(not(unix))]
    {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| {
                matches!(
                    ext.to_ascii_lowercase().as_str(),
                    "exe" | "com" | "bat" | "cmd" | "ps1"
                )
            })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn touch(path: &Path, mode: u32) -> std::io::Result<()> {
        fs::write(path, "#!/bin/sh\n")?;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }

    #[test]
    fn test_scan_path_dedupes_and_sorts() -> Result<(), Box<dyn std::error::Error>> {
        let first = tempdir()?;
        let second = tempdir()?;
        touch(&first.path().join("zsh"), 0o755)?;
        touch(&first.path().join("notes.txt"), 0o644)?;
        touch(&second.path().join("zsh"), 0o755)?;
        touch(&second.path().join("awk"), 0o700)?;
        fs::create_dir(second.path().join("bin_dir"))?;

        let path_var = std::env::join_paths([
            first.path(),
            Path::new("/definitely/not/here"),
            second.path(),
        ])?;
        assert_eq!(scan_path(&path_var), vec!["awk", "zsh"]);
        Ok(())
    }

    #[test]
    fn test_non_executable_name_does_not_shadow() -> Result<(), Box<dyn std::error::Error>> {
        let first = tempdir()?;
        let second = tempdir()?;
        touch(&first.path().join("tool"), 0o644)?;
        touch(&second.path().join("tool"), 0o755)?;

        let path_var = std::env::join_paths([first.path(), second.path()])?;
        assert_eq!(scan_path(&path_var), vec!["tool"]);
        Ok(())
    }

    #[test]
    fn test_scan_empty_path() {
        assert!(scan_path(OsStr::new("")).is_empty());
    }
}
