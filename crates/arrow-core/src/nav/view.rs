//! Render-ready snapshot of a [`NavigationModel`].
//!
//! The UI never inspects the model directly while drawing. It asks for a
//! [`PickerView`] sized to the list area and paints that.

use std::path::PathBuf;

use crate::nav::filter::Order;
use crate::nav::model::NavigationModel;
use crate::nav::viewport::window;

/// Everything one frame of the picker shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    pub header: Header,
    pub body: Body,
    pub footer: Footer,
}

/// Top line: the path under the cursor and the active order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub current_path_label: String,
    pub order: Order,
}

/// Bottom line: how many entries survive the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub filtered_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The last listing failed; shown until the next transition.
    Error(String),
    /// Nothing to list (or nothing matches the query).
    Empty,
    Rows {
        /// Index of `rows[0]` in the filtered listing.
        start: usize,
        rows: Vec<DisplayRow>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub label: String,
    pub is_selected: bool,
    pub is_hidden: bool,
    pub is_symlink: bool,
    pub symlink_target: Option<PathBuf>,
    /// Lowercased name, for icon lookup.
    pub icon_key: String,
    /// Set on the selected row after a descend found no subdirectories.
    pub no_children: bool,
}

impl NavigationModel {
    /// Builds the view for a list area `height` rows tall.
    pub fn view(&self, height: usize) -> PickerView {
        let header = Header {
            current_path_label: match self.selected_entry() {
                Some(entry) => entry.path().display().to_string(),
                None => self.current_dir().path().display().to_string(),
            },
            order: self.order(),
        };

        let footer = Footer {
            filtered_count: self.filtered_entries().len(),
            total_count: self.entries().len(),
        };

        let body = if let Some(err) = self.last_error() {
            Body::Error(err.to_string())
        } else if self.filtered_entries().is_empty() {
            Body::Empty
        } else {
            let win = window(self.filtered_entries(), self.cursor(), height);
            let no_children = self.child_probe() == Some(false);
            let rows = win
                .visible
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let is_selected = win.row_of(self.cursor()) == Some(i);
                    let name = entry.name();
                    DisplayRow {
                        icon_key: name.to_lowercase(),
                        label: name,
                        is_selected,
                        is_hidden: entry.is_hidden(),
                        is_symlink: entry.is_symlink(),
                        symlink_target: entry.symlink_target().map(|t| t.to_path_buf()),
                        no_children: is_selected && no_children,
                    }
                })
                .collect();
            Body::Rows {
                start: win.start,
                rows,
            }
        };

        PickerView {
            header,
            body,
            footer,
        }
    }
}
