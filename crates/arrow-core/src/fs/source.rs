//! The filesystem read primitive the rest of the core is built on.
//!
//! [`FileSystem`] is the seam between the navigation model and the disk.
//! [`LocalFs`] is the `std::fs` implementation used by the binary.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// What kind of object a directory child is, without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    Directory,
    File,
    Symlink,
}

/// One immediate child of a directory as reported by [`FileSystem::read_children`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildInfo {
    pub name: String,
    pub kind: ChildKind,
    /// `None` when the modification time could not be read.
    pub modified: Option<SystemTime>,
}

/// Result of [`FileSystem::stat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub is_dir: bool,
    pub modified: Option<SystemTime>,
}

/// Read-only access to a directory tree.
///
/// Implementations must not follow the final symlink in [`stat`](Self::stat)
/// and must report symlinks as [`ChildKind::Symlink`] in
/// [`read_children`](Self::read_children).
pub trait FileSystem: Send + Sync + fmt::Debug {
    /// Lists the immediate children of `path`.
    fn read_children(&self, path: &Path) -> io::Result<Vec<ChildInfo>>;
    /// Reads the target of the symlink at `path` (one level).
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;
    /// Returns metadata for `path` itself.
    fn stat(&self, path: &Path) -> io::Result<Stat>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn read_children(&self, path: &Path) -> io::Result<Vec<ChildInfo>> {
        let mut children = Vec::new();

        for dir_entry in std::fs::read_dir(path)? {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::trace!("skipping unreadable child of {}: {e}", path.display());
                    continue;
                }
            };
            let file_type = match dir_entry.file_type() {
                Ok(t) => t,
                Err(_) => continue,
            };
            let kind = if file_type.is_symlink() {
                ChildKind::Symlink
            } else if file_type.is_dir() {
                ChildKind::Directory
            } else {
                ChildKind::File
            };
            let modified = std::fs::symlink_metadata(dir_entry.path())
                .and_then(|m| m.modified())
                .ok();

            children.push(ChildInfo {
                name: dir_entry.file_name().to_string_lossy().into_owned(),
                kind,
                modified,
            });
        }

        Ok(children)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::read_link(path)
    }

    fn stat(&self, path: &Path) -> io::Result<Stat> {
        let metadata = std::fs::symlink_metadata(path)?;
        Ok(Stat {
            is_dir: metadata.is_dir(),
            modified: metadata.modified().ok(),
        })
    }
}
