//! Helpers for coolmenu.
//!
//! - Color parsing from strings or hex codes
//! - Home directory lookup
//! - Truncating text to a terminal column width

use ratatui::style::Color;
use std::path::PathBuf;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Parses a string (color name or hex) into a ratatui::style::color
///
/// Supports standard names (red, green, etc.) as well as hex values (#RRGGBB or #RGB)
pub fn parse_color(s: &str) -> Color {
    match s.to_lowercase().as_str() {
        "default" | "reset" => Color::Reset,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "green" => Color::Green,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "black" => Color::Black,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => {
            if let Some(color) = s.strip_prefix('#') {
                let expanded = match color.len() {
                    6 => color.to_string(),
                    3 => color.chars().flat_map(|c| [c, c]).collect(),
                    _ => return Color::Reset,
                };
                if let Ok(rgb) = u32::from_str_radix(&expanded, 16) {
                    return Color::Rgb(
                        ((rgb >> 16) & 0xFF) as u8,
                        ((rgb >> 8) & 0xFF) as u8,
                        (rgb & 0xFF) as u8,
                    );
                }
            }
            // fallback
            Color::Reset
        }
    }
}

pub fn get_home() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Cuts `text` so that it takes at most `max_width` terminal columns.
///
/// Control characters are dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width && !text.chars().any(char::is_control) {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    for c in text.chars().filter(|c| !c.is_control()) {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("Cyan"), Color::Cyan);
        assert_eq!(parse_color("#888888"), Color::Rgb(0x88, 0x88, 0x88));
        assert_eq!(parse_color("#fa0"), Color::Rgb(0xff, 0xaa, 0x00));
        assert_eq!(parse_color("#12345"), Color::Reset);
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("firefox", 4), "fire");
        assert_eq!(truncate_to_width("ls", 10), "ls");
        // wide characters are not split
        assert_eq!(truncate_to_width("🦀crab", 3), "🦀c");
        assert_eq!(truncate_to_width("🦀crab", 1), "");
        assert_eq!(truncate_to_width("a\tb", 5), "ab");
    }
}
