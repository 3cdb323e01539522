//! Directory reading operations.

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;
use crate::fs::node::PathNode;
use crate::fs::source::ChildKind;
use crate::nav::filter::{sort_entries, Order};

/// Reads the immediate subdirectories of `node` and returns them ordered by `order`.
///
/// A child is included when it is a directory, or a symlink whose target is
/// a directory. With `show_hidden == false` children whose own name starts
/// with `.` are dropped before any symlink is resolved.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use arrow_core::{list_directories, Order, PathNode};
///
/// let entries = list_directories(&PathNode::local("/home/user"), false, Order::ByName).unwrap();
/// for entry in &entries {
///     println!("{}", entry.name());
/// }
/// ```
pub fn list_directories(node: &PathNode, show_hidden: bool, order: Order) -> CoreResult<Vec<Entry>> {
    let children = node
        .fs()
        .read_children(node.path())
        .map_err(|e| CoreError::from_io(node.path(), e))?;

    let entries: Vec<Entry> = children
        .into_iter()
        .filter(|child| show_hidden || !child.name.starts_with('.'))
        .filter_map(|child| {
            let child_node = node.child(&child.name);
            match child.kind {
                ChildKind::Directory => Some(Entry::new(child_node, None, child.modified)),
                ChildKind::Symlink => {
                    let target = child_node.dir_link_target()?;
                    Some(Entry::new(child_node, Some(target), child.modified))
                }
                ChildKind::File => None,
            }
        })
        .collect();

    tracing::debug!(
        "listed {} directories in {} ({order:?})",
        entries.len(),
        node.path().display()
    );

    Ok(sort_entries(entries, order))
}
