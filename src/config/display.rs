//! Display configuration options for coolmenu.
//!
//! This module defines the `[display]` table of coolmenu.toml: border shape,
//! prompt text, footer and match highlighting.

use ratatui::widgets::BorderType;
use serde::Deserialize;

/// Display configuration options
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    border_shape: BorderShape,
    title: String,
    prompt: String,
    show_footer: bool,
    show_count: bool,
    highlight_matches: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            border_shape: BorderShape::Rounded,
            title: String::new(),
            prompt: " Search: ".into(),
            show_footer: true,
            show_count: true,
            highlight_matches: true,
        }
    }
}

impl Display {
    #[inline]
    pub fn border_shape(&self) -> &BorderShape {
        &self.border_shape
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[inline]
    pub fn show_footer(&self) -> bool {
        self.show_footer
    }

    #[inline]
    pub fn show_count(&self) -> bool {
        self.show_count
    }

    #[inline]
    pub fn highlight_matches(&self) -> bool {
        self.highlight_matches
    }

    /// Rows taken by everything except the list: borders, query line, divider and footer.
    pub fn chrome_rows(&self) -> u16 {
        let footer = if self.show_footer { 1 } else { 0 };
        // top border, query, divider, bottom border
        4 + footer
    }
}

/// Border shape options
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    Square,
    #[default]
    Rounded,
    Double,
    Thick,
}

impl BorderShape {
    pub fn as_border_type(&self) -> BorderType {
        match self {
            BorderShape::Square => BorderType::Plain,
            BorderShape::Rounded => BorderType::Rounded,
            BorderShape::Double => BorderType::Double,
            BorderShape::Thick => BorderType::Thick,
        }
    }
}
