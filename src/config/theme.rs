//! Theme configuration options for coolmenu
//!
//! This module defines the `[theme]` table of coolmenu.toml.
//! Colors are given as names ("cyan", "darkgray") or hex codes ("#RRGGBB", "#RGB").
//! # Examples
//! ```toml
//! [theme]
//! selection_icon = "› "
//! [theme.border]
//! fg = "#888888"
//! [theme.selection]
//! fg = "black"
//! bg = "cyan"
//! ```

use crate::utils::parse_color;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use std::sync::LazyLock;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Theme {
    border: ColorPair,
    input: ColorPair,
    footer: ColorPair,
    entry: ColorPair,
    selection: ColorPair,
    highlight: ColorPair,
    selection_icon: String,
    selection_reverse: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            border: ColorPair {
                fg: Color::Rgb(0x88, 0x88, 0x88),
                ..ColorPair::default()
            },
            input: ColorPair {
                fg: Color::Rgb(0xff, 0xff, 0xff),
                ..ColorPair::default()
            },
            footer: ColorPair {
                fg: Color::Rgb(0xaa, 0xaa, 0xaa),
                ..ColorPair::default()
            },
            entry: ColorPair::default(),
            selection: ColorPair::default(),
            highlight: ColorPair {
                fg: Color::Yellow,
                ..ColorPair::default()
            },
            selection_icon: "> ".into(),
            selection_reverse: true,
        }
    }
}

impl Theme {
    /// Internal default theme, used as the fallback for colors left at "default".
    pub fn internal_defaults() -> &'static Self {
        static DEFAULT: LazyLock<Theme> = LazyLock::new(Theme::default);
        &DEFAULT
    }

    pub fn border_style(&self) -> Style {
        self.border.style_or(&Theme::internal_defaults().border)
    }

    pub fn input_style(&self) -> Style {
        self.input.style_or(&Theme::internal_defaults().input)
    }

    pub fn footer_style(&self) -> Style {
        self.footer.style_or(&Theme::internal_defaults().footer)
    }

    pub fn entry_style(&self) -> Style {
        self.entry.style_or(&Theme::internal_defaults().entry)
    }

    /// Style of the selected row. Reversed video unless `selection_reverse = false`.
    pub fn selection_style(&self) -> Style {
        let style = self
            .selection
            .style_or(&Theme::internal_defaults().selection);
        if self.selection_reverse {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn highlight_style(&self) -> Style {
        self.highlight
            .style_or(&Theme::internal_defaults().highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }
}

/// ColorPair struct to hold foreground and background colors.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    /// Resolves the ColorPair by replacing Reset colors with those from another ColorPair.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    /// Converts the ColorPair to a Style, falling back to `fallback` for Reset colors.
    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        let resolved = self.resolve(fallback);
        Style::default().fg(resolved.fg).bg(resolved.bg)
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_overrides_and_fallbacks() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            selection_reverse = false
            [selection]
            bg = "#102030"
            [border]
            fg = "default"
            "##,
        )?;
        assert_eq!(theme.selection_style().bg, Some(Color::Rgb(0x10, 0x20, 0x30)));
        assert!(
            !theme
                .selection_style()
                .add_modifier
                .contains(Modifier::REVERSED)
        );
        // "default" falls back to the internal border color
        assert_eq!(theme.border_style().fg, Some(Color::Rgb(0x88, 0x88, 0x88)));
        Ok(())
    }

    #[test]
    fn test_default_selection_is_reversed() {
        let theme = Theme::default();
        assert!(
            theme
                .selection_style()
                .add_modifier
                .contains(Modifier::REVERSED)
        );
        assert_eq!(theme.selection_icon(), "> ");
    }
}
