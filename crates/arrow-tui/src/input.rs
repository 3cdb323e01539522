use arrow_core::{Body, Command};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::app::App;
use crate::icons::order_indicator;
use crate::render::screen_layout;
use crate::ui::header::order_zone;

/// Actions that can result from a key press or mouse event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Select the row at this filtered index and descend into it.
    Open(usize),
    /// End the session without choosing a directory.
    Cancel,
    /// No action for this event.
    None,
}

/// Maps a key event to an InputAction.
///
/// Printable characters (with or without Shift) edit the query; everything
/// else is a fixed binding.
pub fn handle_key(key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let cmd = match key.code {
        KeyCode::Char('c') if ctrl => return InputAction::Cancel,
        KeyCode::Esc => return InputAction::Cancel,
        KeyCode::Char('o') if ctrl => Command::ToggleOrder,
        KeyCode::Char('u') if ctrl => Command::QueryClear,
        KeyCode::Down if shift => Command::ToggleOrder,
        KeyCode::Down => Command::CursorDown,
        KeyCode::Up => Command::CursorUp,
        KeyCode::Left => Command::Ascend,
        KeyCode::Right => Command::Descend,
        KeyCode::Enter => Command::Confirm,
        KeyCode::Home => Command::CursorTop,
        KeyCode::End => Command::CursorBottom,
        KeyCode::Backspace => Command::QueryPop,
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Command::QueryPush(c)
        }
        _ => return InputAction::None,
    };

    InputAction::Command(cmd)
}

/// Maps a mouse event to an InputAction, hit-testing against the screen
/// layout for a terminal of size `area`.
pub fn handle_mouse(mouse: MouseEvent, app: &App, area: Rect) -> InputAction {
    match mouse.kind {
        MouseEventKind::ScrollDown => InputAction::Command(Command::CursorDown),
        MouseEventKind::ScrollUp => InputAction::Command(Command::CursorUp),
        MouseEventKind::Down(MouseButton::Left) => {
            let at = Position::new(mouse.column, mouse.row);
            let layout = screen_layout(area);
            let model = app.model();

            let indicator = order_indicator(model.order(), app.show_icons());
            if order_zone(layout.header, &indicator).contains(at) {
                return InputAction::Command(Command::ToggleOrder);
            }

            if !layout.list.contains(at) {
                return InputAction::None;
            }
            let row = usize::from(at.y - layout.list.y);
            match model.view(layout.list.height as usize).body {
                Body::Rows { start, rows } if row < rows.len() => InputAction::Open(start + row),
                _ => InputAction::None,
            }
        }
        _ => InputAction::None,
    }
}
