//! Header box: order indicator followed by the path under the cursor.

use arrow_core::{parse_color, Header, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::icons::order_indicator;

/// Renders the bordered header.
/// Example: "│  name /home/user/projects │"
pub fn render_header(f: &mut Frame, area: Rect, header: &Header, show_icons: bool, theme: &Theme) {
    let style = Style::default()
        .fg(parse_color(&theme.current_directory))
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(order_indicator(header.order, show_icons), style),
        Span::styled(format!("{} ", header.current_path_label), style),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(parse_color(&theme.border)));

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// Screen area covered by the order indicator inside a header drawn at `area`.
pub fn order_zone(area: Rect, order_text: &str) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let width = Span::raw(order_text).width() as u16;
    Rect::new(inner.x, inner.y, width.min(inner.width), inner.height.min(1))
}
