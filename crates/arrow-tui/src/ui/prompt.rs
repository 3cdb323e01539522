//! Query input line.

use arrow_core::{parse_color, Theme};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PROMPT: &str = "❯ ";
const PLACEHOLDER: &str = "Search";

/// Renders `❯ query` and places the terminal cursor after the query.
/// An empty query shows a dimmed placeholder.
pub fn render_prompt(f: &mut Frame, area: Rect, query: &str, theme: &Theme) {
    let prompt = Span::styled(PROMPT, Style::default().fg(parse_color(&theme.prompt)));
    let text = if query.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(parse_color(&theme.disabled)))
    } else {
        Span::styled(query, Style::default().fg(parse_color(&theme.foreground)))
    };

    let offset = prompt.width() + if query.is_empty() { 0 } else { text.width() };
    f.render_widget(Paragraph::new(Line::from(vec![prompt, text])), area);

    let x = area.x.saturating_add(offset as u16).min(area.right().saturating_sub(1));
    f.set_cursor_position(Position::new(x, area.y));
}
