use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::ui::count::render_count;
use crate::ui::header::render_header;
use crate::ui::picker::render_picker;
use crate::ui::prompt::render_prompt;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub prompt: Rect,
    pub count: Rect,
    pub list: Rect,
}

/// Splits `area` into header box, prompt, counter and list (top to bottom).
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        prompt: chunks[1],
        count: chunks[2],
        list: chunks[3],
    }
}

/// Main render function: composes the full UI each frame.
pub fn render(f: &mut Frame, app: &App) {
    let layout = screen_layout(f.area());
    let view = app.model().view(layout.list.height as usize);
    let theme = app.theme();

    render_header(f, layout.header, &view.header, app.show_icons(), theme);
    render_count(f, layout.count, &view.footer, theme);
    render_picker(f, layout.list, &view.body, app.show_icons(), theme);
    // Last, so the terminal cursor ends up in the query line.
    render_prompt(f, layout.prompt, app.model().query(), theme);
}
