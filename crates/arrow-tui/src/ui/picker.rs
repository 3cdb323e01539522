//! Directory list rendering with theme support.
//!
//! The visible window is computed by the core; this module only paints the
//! rows it is given, plus the error and empty states.

use arrow_core::{parse_color, Body, DisplayRow, Theme};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::icons::icon_for_row;

const CURSOR: &str = "❯";
const EMPTY_MESSAGE: &str = " No directory found.";

/// Renders the picker body into `area`.
pub fn render_picker(f: &mut Frame, area: Rect, body: &Body, show_icons: bool, theme: &Theme) {
    let lines: Vec<Line> = match body {
        Body::Error(message) => vec![Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red),
        ))],
        Body::Empty => vec![Line::from(vec![Span::raw("  "), empty_span(theme)])],
        Body::Rows { rows, .. } => rows
            .iter()
            .map(|row| row_line(row, show_icons, theme))
            .collect(),
    };

    f.render_widget(Paragraph::new(lines), area);
}

fn row_line<'a>(row: &'a DisplayRow, show_icons: bool, theme: &Theme) -> Line<'a> {
    let icon = icon_for_row(row, show_icons);
    let text = match &row.symlink_target {
        Some(target) => format!("{icon}{} → {}", row.label, target.display()),
        None => format!("{icon}{}", row.label),
    };

    if !row.is_selected {
        return Line::from(vec![Span::raw("  "), Span::styled(text, row_style(row, theme))]);
    }

    let mut spans = vec![
        Span::styled(CURSOR, Style::default().fg(parse_color(&theme.cursor))),
        Span::raw(" "),
        Span::styled(
            text,
            Style::default()
                .fg(parse_color(&theme.highlight))
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if row.no_children {
        spans.push(Span::raw("  "));
        spans.push(empty_span(theme));
    }
    Line::from(spans)
}

fn row_style(row: &DisplayRow, theme: &Theme) -> Style {
    if row.is_symlink {
        Style::default().fg(parse_color(&theme.symlink))
    } else {
        Style::default().fg(parse_color(&theme.foreground))
    }
}

fn empty_span(theme: &Theme) -> Span<'static> {
    Span::styled(
        EMPTY_MESSAGE,
        Style::default().bg(parse_color(&theme.disabled)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::PathBuf;

    fn row(name: &str, selected: bool) -> DisplayRow {
        DisplayRow {
            label: name.to_string(),
            is_selected: selected,
            is_hidden: false,
            is_symlink: false,
            symlink_target: None,
            icon_key: name.to_lowercase(),
            no_children: false,
        }
    }

    fn draw(body: &Body) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|f| render_picker(f, f.area(), body, false, &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..3)
            .map(|y| crate::ui::row_text(buffer, y).trim_end().to_string())
            .collect()
    }

    #[test]
    fn selected_row_gets_cursor() {
        let body = Body::Rows {
            start: 0,
            rows: vec![row("alpha", false), row("beta", true)],
        };
        let lines = draw(&body);
        assert_eq!(lines[0], "  alpha");
        assert_eq!(lines[1], "❯ beta");
    }

    #[test]
    fn symlink_row_shows_target() {
        let mut link = row("link", false);
        link.is_symlink = true;
        link.symlink_target = Some(PathBuf::from("../data"));
        let lines = draw(&Body::Rows {
            start: 0,
            rows: vec![link],
        });
        assert_eq!(lines[0], "  link → ../data");
    }

    #[test]
    fn childless_hint_follows_selected_row() {
        let mut selected = row("gamma", true);
        selected.no_children = true;
        let lines = draw(&Body::Rows {
            start: 0,
            rows: vec![selected],
        });
        assert_eq!(lines[0], "❯ gamma   No directory found.");
    }

    #[test]
    fn empty_and_error_states() {
        assert_eq!(draw(&Body::Empty)[0], "   No directory found.");
        assert_eq!(
            draw(&Body::Error("permission denied: /root".into()))[0],
            "  permission denied: /root"
        );
    }

    #[test]
    fn symlink_style_uses_theme() {
        let mut link = row("link", false);
        link.is_symlink = true;
        assert_eq!(row_style(&link, &Theme::default()).fg, Some(Color::Indexed(36)));
        assert_eq!(
            row_style(&row("a", false), &Theme::default()).fg,
            Some(Color::Indexed(15))
        );
    }
}
