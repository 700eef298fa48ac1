//! Launching the chosen command.
//!
//! On Unix the coolmenu process is replaced by the command, the way a shell `exec` does.
//! Elsewhere the command is spawned and coolmenu exits with its status.

use crate::error::{Error, Result};

use std::path::PathBuf;
use std::process::Command;

/// Resolves `command` through PATH.
pub fn resolve(command: &str) -> Result<PathBuf> {
    which::which(command).map_err(|_| Error::NotFound(command.to_string()))
}

/// Replaces the current process with `command`. Only returns on failure.
#[cfg(unix)]
pub fn launch(command: &str) -> Result<()> {
    use std::os::unix::process::CommandExt;

    let program = resolve(command)?;
    tracing::info!(command, program = %program.display(), "launching");

    let source = Command::new(&program).arg0(command).exec();
    Err(Error::Exec {
        command: command.to_string(),
        source,
    })
}

/// Runs `command` to completion and exits with its status code.
#[cfg(not(unix))]
pub fn launch(command: &str) -> Result<()> {
    let program = resolve(command)?;
    tracing::info!(command, program = %program.display(), "launching");

    let status = Command::new(&program)
        .status()
        .map_err(|source| Error::Exec {
            command: command.to_string(),
            source,
        })?;
    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unknown_command() {
        let name = "coolmenu-definitely-not-a-real-command";
        assert!(matches!(resolve(name), Err(Error::NotFound(n)) if n == name));
    }
}
