//! Filtered/total counter under the prompt.

use arrow_core::{parse_color, Footer, Theme};
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Renders "  filtered/total" in the disabled color.
pub fn render_count(f: &mut Frame, area: Rect, footer: &Footer, theme: &Theme) {
    let text = format!("  {}/{}", footer.filtered_count, footer.total_count);
    let count = Paragraph::new(text).style(Style::default().fg(parse_color(&theme.disabled)));
    f.render_widget(count, area);
}
