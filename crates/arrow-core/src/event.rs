//! Commands sent from the UI to the navigation model.
//!
//! The UI translates key presses and mouse clicks into [`Command`]s and feeds
//! them to [`NavigationModel::handle`](crate::nav::model::NavigationModel::handle).
//! This keeps every input surface driving the same transitions.

/// A transition the UI requests from the navigation model.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor up by one entry.
    CursorUp,
    /// Move the cursor down by one entry.
    CursorDown,
    /// Jump to the first entry.
    CursorTop,
    /// Jump to the last entry.
    CursorBottom,
    /// Put the cursor on the given index of the filtered listing.
    Select(usize),
    /// Move to the parent directory.
    Ascend,
    /// Enter the directory under the cursor.
    Descend,
    /// Switch between name and modification-time order.
    ToggleOrder,
    /// Replace the filter query.
    SetQuery(String),
    /// Append a character to the filter query.
    QueryPush(char),
    /// Remove the last character of the filter query.
    QueryPop,
    /// Empty the filter query.
    QueryClear,
    /// Choose the directory under the cursor and end the session.
    Confirm,
}
