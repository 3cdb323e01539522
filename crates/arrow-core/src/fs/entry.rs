//! Directory entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::fs::node::PathNode;

/// A directory, or a symlink resolving to a directory, that can be shown and
/// navigated into.
///
/// `Entry` is immutable. Entries are produced by
/// [`list_directories`](crate::fs::ops::list_directories); symlinks to
/// non-directories and broken symlinks never become entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    node: PathNode,
    symlink_target: Option<PathBuf>,
    modified: Option<SystemTime>,
}

impl Entry {
    pub fn new(node: PathNode, symlink_target: Option<PathBuf>, modified: Option<SystemTime>) -> Self {
        Self {
            node,
            symlink_target,
            modified,
        }
    }

    pub fn node(&self) -> &PathNode {
        &self.node
    }

    pub fn path(&self) -> &Path {
        self.node.path()
    }

    pub fn name(&self) -> String {
        self.node.name()
    }

    pub fn is_hidden(&self) -> bool {
        self.node.is_hidden()
    }

    /// Raw link target, present only for symlinked directories.
    pub fn symlink_target(&self) -> Option<&Path> {
        self.symlink_target.as_deref()
    }

    pub fn is_symlink(&self) -> bool {
        self.symlink_target.is_some()
    }

    /// Last-modified time, if it could be read. Only used for ordering.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}
