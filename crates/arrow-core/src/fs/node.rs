//! Path handle with filesystem access.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use unicode_normalization::UnicodeNormalization;

use crate::fs::source::{FileSystem, LocalFs};

/// An immutable handle to one directory path plus the filesystem it lives on.
///
/// Equality and hashing only consider the path: two nodes pointing at the
/// same path are equal even when they were created with different
/// [`FileSystem`] handles.
#[derive(Clone)]
pub struct PathNode {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl PathNode {
    /// Creates a node for `path` on `fs`.
    pub fn new(path: impl Into<PathBuf>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    /// Creates a node for `path` on the local filesystem.
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self::new(path, Arc::new(LocalFs))
    }

    /// Returns a node for `name` inside this directory, sharing the same handle.
    pub fn child(&self, name: &str) -> Self {
        Self {
            path: self.path.join(name),
            fs: Arc::clone(&self.fs),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    /// The final path segment, NFC-normalised.
    ///
    /// Falls back to the whole path for `/`, `.` and similar segment-less paths.
    pub fn name(&self) -> String {
        match self.path.file_name() {
            Some(n) => n.to_string_lossy().nfc().collect(),
            None => self.path.to_string_lossy().nfc().collect(),
        }
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'))
    }

    /// The directory one level up, or `None` at the filesystem root.
    ///
    /// Root detection is a fixpoint check: the node has no parent when its
    /// lexical parent is the node itself.
    pub fn parent(&self) -> Option<PathNode> {
        let parent = lexical_parent(&self.path);
        if parent == self.path {
            return None;
        }
        Some(Self {
            path: parent,
            fs: Arc::clone(&self.fs),
        })
    }

    /// Resolves one level of symlink and returns the raw link target, only
    /// when the node is a symlink whose target is a directory.
    ///
    /// Resolution failures (broken link, permission error) yield `None`.
    pub fn symlink_target(&self) -> Option<PathBuf> {
        let stat = self.fs.stat(&self.path).ok()?;
        if stat.is_dir {
            return None;
        }
        self.dir_link_target()
    }

    /// Symlink resolution without the initial `stat`, for children whose
    /// kind is already known from a directory listing.
    pub(crate) fn dir_link_target(&self) -> Option<PathBuf> {
        let target = match self.fs.read_link(&self.path) {
            Ok(t) => t,
            Err(e) => {
                tracing::trace!("not a symlink {}: {e}", self.path.display());
                return None;
            }
        };

        let resolved = if target.is_absolute() {
            target.clone()
        } else {
            lexical_parent(&self.path).join(&target)
        };

        match self.fs.stat(&resolved) {
            Ok(stat) if stat.is_dir => Some(target),
            Ok(_) => None,
            Err(e) => {
                tracing::trace!(
                    "unresolvable symlink {} -> {}: {e}",
                    self.path.display(),
                    target.display()
                );
                None
            }
        }
    }
}

/// Lexical parent of `path`; a bare relative segment has `.` as parent and
/// paths without a parent (`/`, `.`) are their own parent.
fn lexical_parent(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if p.as_os_str().is_empty() => PathBuf::from("."),
        Some(p) => p.to_path_buf(),
        None => path.to_path_buf(),
    }
}

/// Collapses `.` and `..` segments without touching the filesystem, the way
/// `cd -L` does. `..` at the root stays at the root; leading `..` on a
/// relative path is kept.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for PathNode {}

impl Hash for PathNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl fmt::Debug for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathNode").field(&self.path).finish()
    }
}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
