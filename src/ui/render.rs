//! UI renderer implementation.
//!
//! Contains the top-level `render` entry point used by the terminal loop and the
//! layout helper that splits the screen into query line, divider, list and footer.
//!
//! This module stays "pure rendering": it reads the menu state and the config and
//! produces widgets. The only thing it writes back is the list height, which is the
//! menu's viewport height.

use crate::app::AppState;
use crate::config::Display;
use crate::utils::truncate_to_width;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

const FOOTER_HELP: &str = " ↑↓ / Ctrl-jk  Enter launch  Esc quit  Ctrl-u clear ";
const LOADING_TEXT: &str = " scanning PATH… ";

/// Screen areas of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub query: Rect,
    pub divider: Rect,
    pub list: Rect,
    pub footer: Option<Rect>,
}

/// Splits the area inside the outer border into the menu rows.
pub fn layout_chunks(area: Rect, display: &Display) -> MenuLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ];
    if display.show_footer() {
        constraints.push(Constraint::Length(1));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    MenuLayout {
        query: chunks[0],
        divider: chunks[1],
        list: chunks[2],
        footer: chunks.get(3).copied(),
    }
}

/// Render function which draws the whole menu on each frame.
pub fn render(frame: &mut Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = layout_chunks(area, app.config().display());
    app.set_viewport_height(layout.list.height as usize);

    let app: &AppState = app;
    let display_cfg = app.config().display();
    let theme_cfg = app.config().theme();
    let border_style = theme_cfg.border_style();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(display_cfg.border_shape().as_border_type())
        .border_style(border_style);
    if !display_cfg.title().is_empty() {
        block = block.title(format!(" {} ", display_cfg.title()));
    }
    frame.render_widget(block, area);

    draw_query_line(frame, app, layout.query);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "─".repeat(layout.divider.width as usize),
            border_style,
        )),
        layout.divider,
    );
    draw_list(frame, app, layout.list);
    if let Some(footer) = layout.footer {
        draw_footer(frame, app, footer);
    }
}

/// Draws the prompt and query, with the `[selected / total]` indicator on the right.
///
/// When the query does not fit, its tail stays visible.
fn draw_query_line(frame: &mut Frame, app: &AppState, area: Rect) {
    let menu = app.menu();
    let display_cfg = app.config().display();
    let input_style = app.config().theme().input_style();
    let field_width = area.width as usize;

    let indicator = if display_cfg.show_count() {
        let current = if menu.is_empty() {
            0
        } else {
            menu.selected() + 1
        };
        format!("[{} / {}] ", current, menu.len())
    } else {
        String::new()
    };
    let max_input_width = field_width.saturating_sub(indicator.width());

    let text = format!("{}{}", display_cfg.prompt(), menu.query());
    let visible = tail_to_width(&text, max_input_width);
    let visible_width = visible.width();

    let mut spans = vec![Span::styled(visible.to_string(), input_style)];
    let pad_width = max_input_width.saturating_sub(visible_width);
    if pad_width > 0 {
        spans.push(Span::raw(" ".repeat(pad_width)));
    }
    if !indicator.is_empty() {
        spans.push(Span::styled(indicator, app.config().theme().footer_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if area.width > 0 && area.height > 0 {
        let cursor_x = (visible_width as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position((area.x + cursor_x, area.y));
    }
}

/// Draws the visible slice of the filtered list with the selection marked.
fn draw_list(frame: &mut Frame, app: &AppState, area: Rect) {
    let menu = app.menu();
    let theme_cfg = app.config().theme();
    let highlight = app.config().display().highlight_matches();
    let width = area.width as usize;

    if menu.is_empty() {
        let line = Line::from(Span::styled(" No matches", theme_cfg.footer_style()));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let icon = theme_cfg.selection_icon();
    let icon_width = icon.width();
    let blank_icon = " ".repeat(icon_width);
    let entry_style = theme_cfg.entry_style();
    let selection_style = theme_cfg.selection_style();
    let highlight_style = theme_cfg.highlight_style();

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in menu.visible().into_iter().take(area.height as usize) {
        let style = if row.selected {
            selection_style
        } else {
            entry_style
        };
        let marker = if row.selected {
            icon.to_string()
        } else {
            blank_icon.clone()
        };

        let name = truncate_to_width(row.name, width.saturating_sub(icon_width));
        let positions = if highlight {
            menu.match_positions(row.name)
        } else {
            Vec::new()
        };

        let mut spans = vec![Span::styled(marker, style)];
        spans.extend(highlight_spans(
            &name,
            &positions,
            style,
            style.patch(highlight_style),
        ));
        let used = icon_width + name.width();
        if used < width {
            spans.push(Span::styled(" ".repeat(width - used), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let style = app.config().theme().footer_style();
    let width = area.width as usize;

    let mut text = String::from(FOOTER_HELP);
    if app.is_loading() {
        text.push_str(LOADING_TEXT);
    }
    let text = truncate_to_width(&text, width);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), area);
}

/// Splits `text` into spans, styling the characters at `positions` with `matched`.
fn highlight_spans(
    text: &str,
    positions: &[usize],
    base: Style,
    matched: Style,
) -> Vec<Span<'static>> {
    if positions.is_empty() {
        return vec![Span::styled(text.to_string(), base)];
    }

    let mut spans = Vec::new();
    let mut current = String::new();
    let mut current_hit = false;
    for (idx, c) in text.chars().enumerate() {
        let hit = positions.contains(&idx);
        if hit != current_hit && !current.is_empty() {
            let style = if current_hit { matched } else { base };
            spans.push(Span::styled(std::mem::take(&mut current), style));
        }
        current_hit = hit;
        current.push(c);
    }
    if !current.is_empty() {
        let style = if current_hit { matched } else { base };
        spans.push(Span::styled(current, style));
    }
    spans
}

/// Returns the longest suffix of `text` that fits into `max_width` columns.
fn tail_to_width(text: &str, max_width: usize) -> &str {
    if text.width() <= max_width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn test_highlight_spans_groups_runs() {
        let base = Style::default();
        let matched = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let spans = highlight_spans("catdoc", &[3, 4, 5], base, matched);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "cat");
        assert_eq!(spans[0].style, base);
        assert_eq!(spans[1].content, "doc");
        assert_eq!(spans[1].style, matched);

        let spans = highlight_spans("git", &[0, 2], base, matched);
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["g", "i", "t"]);
    }

    #[test]
    fn test_tail_to_width_keeps_end() {
        assert_eq!(tail_to_width(" Search: abc", 20), " Search: abc");
        assert_eq!(tail_to_width(" Search: abcdef", 6), "abcdef");
        assert_eq!(tail_to_width("xyz", 0), "");
    }
}
