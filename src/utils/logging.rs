//! Opt-in file logging.
//!
//! The menu owns the whole terminal, so nothing may be written to stderr while it runs.
//! Logging is enabled only when `COOLMENU_LOG_DIR` points at a usable directory, in which
//! case events go to `coolmenu.<pid>.log` there. The filter is read from `COOLMENU_LOG`,
//! then `RUST_LOG`, and defaults to `coolmenu=debug`.

use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_FILTER: &str = "coolmenu=debug";

/// Installs the global tracing subscriber if `COOLMENU_LOG_DIR` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init() -> Option<PathBuf> {
    let log_dir = std::env::var_os("COOLMENU_LOG_DIR").map(PathBuf::from)?;
    std::fs::create_dir_all(&log_dir).ok()?;

    let log_path = log_dir.join(format!("coolmenu.{}.log", std::process::id()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok()?;

    let filter = EnvFilter::try_from_env("COOLMENU_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::info!(path = ?log_path, "logging initialized");
    Some(log_path)
}
