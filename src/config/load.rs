//! The config loading module for coolmenu.
//!
//! Handles loading and deserializing settings from `coolmenu.toml` into [Config],
//! and writing a default config file for `coolmenu --init`.

use crate::config::{Display, General, Keys, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, io, path::Path, path::PathBuf};

/// Main configuration struct for coolmenu
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
}

pub(crate) const DEFAULT_TOML: &str = r##"# coolmenu.toml - default configuration for coolmenu

# Commented values are the internal defaults.
# Colors: terminal names ("cyan", "darkgray") or hex codes ("#RRGGBB").

[general]
# How the query is matched: "substring", "fuzzy" or "skim"
# matcher = "substring"
# Sort matches by score instead of keeping alphabetical order
# rank_by_score = false
# use_cache = true
# Rescan PATH in the background when the list came from the cache
# refresh_on_start = true

[display]
# border_shape = "rounded"     # "square", "rounded", "double" or "thick"
# title = ""
# prompt = " Search: "
# show_footer = true
# show_count = true
# highlight_matches = true

[theme]
# selection_icon = "> "
# selection_reverse = true

# [theme.border]
# fg = "#888888"

# [theme.input]
# fg = "#ffffff"

# [theme.footer]
# fg = "#aaaaaa"

# [theme.entry]
# fg = "default"
# bg = "default"

# [theme.selection]
# fg = "default"
# bg = "default"

# [theme.highlight]
# fg = "yellow"

# [keys]
# up = ["up", "<c-k>"]
# down = ["down", "<c-j>"]
# page_up = ["pageup"]
# page_down = ["pagedown"]
# first = ["home"]
# last = ["end"]
# confirm = ["enter"]
# cancel = ["esc", "<c-c>"]
# clear = ["<c-u>"]
# backspace = ["backspace", "<c-h>"]
"##;

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by the entry point before the terminal is set up.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("[coolmenu] Error reading config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the COOLMENU_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/coolmenu/coolmenu.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("COOLMENU_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("coolmenu/coolmenu.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/coolmenu/coolmenu.toml");
        }
        PathBuf::from("coolmenu.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        Ok(())
    }
}
