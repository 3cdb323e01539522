//! The navigation state machine.
//!
//! [`NavigationModel`] holds everything one browsing session needs: the
//! current directory, its listing, the filter query, the cursor, and the last
//! listing error. Every transition consumes the model and returns the next
//! one, so there is never shared mutable state between the UI and the core.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::CoreError;
use crate::event::Command;
use crate::fs::entry::Entry;
use crate::fs::node::PathNode;
use crate::fs::ops::list_directories;
use crate::nav::filter::{fuzzy_filter, Order};

/// Result of applying a [`Command`].
#[derive(Debug, Clone)]
pub enum Step {
    /// The session goes on with this model.
    Continue(NavigationModel),
    /// The user chose this directory; the session is over.
    Confirmed(PathBuf),
}

/// Browsing state for one session.
///
/// Invariant: `cursor < filtered.len()` when `filtered` is non-empty, and
/// `cursor == 0` when it is empty.
#[derive(Debug, Clone)]
pub struct NavigationModel {
    current_dir: PathNode,
    order: Order,
    show_hidden: bool,
    entries: Vec<Entry>,
    query: String,
    filtered: Vec<Entry>,
    cursor: usize,
    last_error: Option<Arc<CoreError>>,
    /// `None` = unknown, `Some(false)` = the last descend found no children.
    child_probe: Option<bool>,
}

impl NavigationModel {
    /// Starts a session in `start`, listed by name.
    ///
    /// A listing failure is not fatal: the model starts empty with the error
    /// recorded for display.
    pub fn new(start: PathNode, show_hidden: bool, query: impl Into<String>) -> Self {
        let order = Order::ByName;
        let query = query.into();

        let (entries, last_error) = match list_directories(&start, show_hidden, order) {
            Ok(entries) => (entries, None),
            Err(e) => {
                tracing::error!("failed to list {}: {e}", start.path().display());
                (Vec::new(), Some(Arc::new(e)))
            }
        };
        let filtered = fuzzy_filter(&entries, &query);

        Self {
            current_dir: start,
            order,
            show_hidden,
            entries,
            query,
            filtered,
            cursor: 0,
            last_error,
            child_probe: None,
        }
    }

    pub fn current_dir(&self) -> &PathNode {
        &self.current_dir
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Full listing of the current directory.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The listing after the query filter.
    pub fn filtered_entries(&self) -> &[Entry] {
        &self.filtered
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.filtered.get(self.cursor)
    }

    pub fn last_error(&self) -> Option<&CoreError> {
        self.last_error.as_deref()
    }

    pub fn child_probe(&self) -> Option<bool> {
        self.child_probe
    }

    /// Applies `cmd` and returns the next step.
    pub fn handle(self, cmd: Command) -> Step {
        tracing::debug!("command {cmd:?}");
        let model = match cmd {
            Command::CursorUp => self.move_up(),
            Command::CursorDown => self.move_down(),
            Command::CursorTop => self.move_to_first(),
            Command::CursorBottom => self.move_to_last(),
            Command::Select(index) => self.select(index),
            Command::Ascend => self.ascend(),
            Command::Descend => self.descend(),
            Command::ToggleOrder => self.toggle_order(),
            Command::SetQuery(q) => self.set_query(q),
            Command::QueryPush(c) => self.push_query_char(c),
            Command::QueryPop => self.pop_query_char(),
            Command::QueryClear => self.clear_query(),
            Command::Confirm => match self.confirm() {
                Some(path) => return Step::Confirmed(path),
                None => self.begin(),
            },
        };
        Step::Continue(model)
    }

    /// Moves the cursor down by one. Stays put on the last entry.
    pub fn move_down(self) -> Self {
        let index = self.cursor + 1;
        self.begin().with_cursor(index)
    }

    /// Moves the cursor up by one. Stays put on the first entry.
    pub fn move_up(self) -> Self {
        let index = self.cursor.saturating_sub(1);
        self.begin().with_cursor(index)
    }

    pub fn move_to_first(self) -> Self {
        self.begin().with_cursor(0)
    }

    pub fn move_to_last(self) -> Self {
        let last = self.filtered.len().saturating_sub(1);
        self.begin().with_cursor(last)
    }

    /// Puts the cursor on `index`, clamped to the filtered listing.
    pub fn select(self, index: usize) -> Self {
        self.begin().with_cursor(index)
    }

    /// Goes to the parent directory and puts the cursor on the directory
    /// just left. Does nothing at the filesystem root.
    ///
    /// The model moves to the parent even when listing it fails; the listing
    /// is then empty and the error is kept for display.
    pub fn ascend(self) -> Self {
        let model = self.begin();
        let Some(parent) = model.current_dir.parent() else {
            return model;
        };
        let left = model.current_dir.clone();

        match list_directories(&parent, model.show_hidden, model.order) {
            Ok(entries) => {
                let cursor = entries.iter().position(|e| *e.node() == left).unwrap_or(0);
                tracing::debug!("ascended to {}", parent.path().display());
                Self {
                    current_dir: parent,
                    filtered: entries.clone(),
                    entries,
                    query: String::new(),
                    cursor,
                    child_probe: None,
                    ..model
                }
            }
            Err(e) => Self {
                current_dir: parent,
                entries: Vec::new(),
                filtered: Vec::new(),
                query: String::new(),
                cursor: 0,
                child_probe: None,
                ..model
            }
            .with_error(e),
        }
    }

    /// Enters the directory under the cursor.
    ///
    /// When that directory has no subdirectories the model stays where it is
    /// and records the fact in [`child_probe`](Self::child_probe). A listing
    /// failure also leaves the current directory and listing untouched.
    pub fn descend(self) -> Self {
        let model = Self {
            child_probe: None,
            ..self.begin()
        };
        let Some(target) = model.selected_entry().cloned() else {
            return model;
        };

        match list_directories(target.node(), model.show_hidden, model.order) {
            Ok(entries) if entries.is_empty() => {
                tracing::debug!("{} has no subdirectories", target.path().display());
                Self {
                    child_probe: Some(false),
                    ..model
                }
            }
            Ok(entries) => {
                tracing::debug!("descended into {}", target.path().display());
                Self {
                    current_dir: target.node().clone(),
                    filtered: entries.clone(),
                    entries,
                    query: String::new(),
                    cursor: 0,
                    ..model
                }
            }
            Err(e) => model.with_error(e),
        }
    }

    /// Switches between name and modification-time order.
    ///
    /// The cursor keeps its numeric index, so after reordering it may point
    /// at a different directory.
    pub fn toggle_order(self) -> Self {
        let model = self.begin();
        let order = model.order.toggled();

        match list_directories(&model.current_dir, model.show_hidden, order) {
            Ok(entries) => {
                let filtered = fuzzy_filter(&entries, &model.query);
                let cursor = model.cursor;
                Self {
                    order,
                    entries,
                    filtered,
                    ..model
                }
                .with_cursor(cursor)
            }
            Err(e) => Self {
                order,
                entries: Vec::new(),
                filtered: Vec::new(),
                cursor: 0,
                ..model
            }
            .with_error(e),
        }
    }

    /// Replaces the query and re-filters the listing.
    ///
    /// The cursor returns to the top only when the query text changed.
    pub fn set_query(self, query: impl Into<String>) -> Self {
        let model = self.begin();
        let query = query.into();
        let filtered = fuzzy_filter(&model.entries, &query);

        if query == model.query {
            let cursor = model.cursor;
            return Self { filtered, ..model }.with_cursor(cursor);
        }

        Self {
            query,
            filtered,
            cursor: 0,
            child_probe: None,
            ..model
        }
    }

    pub fn push_query_char(self, c: char) -> Self {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(query)
    }

    pub fn pop_query_char(self) -> Self {
        let mut query = self.query.clone();
        query.pop();
        self.set_query(query)
    }

    pub fn clear_query(self) -> Self {
        self.set_query(String::new())
    }

    /// The path under the cursor, or `None` when nothing is listed.
    pub fn confirm(&self) -> Option<PathBuf> {
        self.selected_entry().map(|e| e.path().to_path_buf())
    }

    /// Clears the transient error at the start of a transition.
    fn begin(self) -> Self {
        Self {
            last_error: None,
            ..self
        }
    }

    /// Sets the cursor clamped to the filtered listing. Clears the child hint.
    fn with_cursor(self, index: usize) -> Self {
        let cursor = if self.filtered.is_empty() {
            0
        } else {
            index.min(self.filtered.len() - 1)
        };
        Self {
            cursor,
            child_probe: None,
            ..self
        }
    }

    fn with_error(self, err: CoreError) -> Self {
        tracing::warn!("listing failed: {err}");
        Self {
            last_error: Some(Arc::new(err)),
            ..self
        }
    }
}
