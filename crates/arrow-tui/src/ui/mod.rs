//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod count;
pub mod header;
pub mod picker;
pub mod prompt;

/// Text of buffer row `y`, for render tests.
#[cfg(test)]
pub(crate) fn row_text(buffer: &ratatui::buffer::Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}
