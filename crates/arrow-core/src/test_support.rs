//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

use crate::fs::node::PathNode;
use crate::fs::source::{ChildInfo, ChildKind, FileSystem, Stat};

#[derive(Debug, Clone)]
enum Node {
    Dir { modified: SystemTime, readable: bool },
    File,
    Symlink(PathBuf),
}

/// In-memory [`FileSystem`] with short, predictable absolute paths.
///
/// Paths are stored exactly as given; no normalisation is done.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: Mutex<BTreeMap<PathBuf, Node>>,
}

impl MemoryFs {
    pub fn new() -> Arc<Self> {
        let fs = Self::default();
        fs.insert("/", Node::Dir {
            modified: SystemTime::UNIX_EPOCH,
            readable: true,
        });
        Arc::new(fs)
    }

    /// Adds a directory (and its missing ancestors) modified `secs` after the epoch.
    pub fn dir_at(&self, path: &str, secs: u64) {
        let path = PathBuf::from(path);
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            let mut nodes = self.lock();
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir {
                modified: SystemTime::UNIX_EPOCH,
                readable: true,
            });
        }
        self.insert(
            path,
            Node::Dir {
                modified: SystemTime::UNIX_EPOCH + Duration::from_secs(secs),
                readable: true,
            },
        );
    }

    pub fn dir(&self, path: &str) {
        self.dir_at(path, 0);
    }

    pub fn file(&self, path: &str) {
        self.insert(path, Node::File);
    }

    pub fn symlink(&self, path: &str, target: &str) {
        self.insert(path, Node::Symlink(PathBuf::from(target)));
    }

    /// Makes reading the directory at `path` fail with `PermissionDenied`.
    pub fn deny(&self, path: &str) {
        let mut nodes = self.lock();
        if let Some(Node::Dir { readable, .. }) = nodes.get_mut(Path::new(path)) {
            *readable = false;
        }
    }

    /// Removes `path` and everything below it.
    pub fn remove(&self, path: &str) {
        let root = Path::new(path);
        self.lock().retain(|p, _| !p.starts_with(root));
    }

    /// A [`PathNode`] for `path` backed by this filesystem.
    pub fn node(self: &Arc<Self>, path: &str) -> PathNode {
        PathNode::new(path, Arc::clone(self) as Arc<dyn FileSystem>)
    }

    fn insert(&self, path: impl Into<PathBuf>, node: Node) {
        self.lock().insert(path.into(), node);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Node>> {
        self.nodes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSystem for MemoryFs {
    fn read_children(&self, path: &Path) -> io::Result<Vec<ChildInfo>> {
        let nodes = self.lock();
        // Follow one symlink, the way opening a directory does.
        let path = match nodes.get(path) {
            Some(Node::Symlink(target)) if target.is_absolute() => target.clone(),
            Some(Node::Symlink(target)) => path.parent().unwrap_or(path).join(target),
            _ => path.to_path_buf(),
        };
        let path = path.as_path();
        match nodes.get(path) {
            None => return Err(io::ErrorKind::NotFound.into()),
            Some(Node::Dir { readable: false, .. }) => {
                return Err(io::ErrorKind::PermissionDenied.into())
            }
            Some(Node::Dir { .. }) => {}
            Some(_) => return Err(io::ErrorKind::NotADirectory.into()),
        }

        Ok(nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path) && p.as_path() != path)
            .map(|(p, node)| {
                let (kind, modified) = match node {
                    Node::Dir { modified, .. } => (ChildKind::Directory, Some(*modified)),
                    Node::File => (ChildKind::File, None),
                    Node::Symlink(_) => (ChildKind::Symlink, None),
                };
                ChildInfo {
                    name: p
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    kind,
                    modified,
                }
            })
            .collect())
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        match self.lock().get(path) {
            Some(Node::Symlink(target)) => Ok(target.clone()),
            Some(_) => Err(io::ErrorKind::InvalidInput.into()),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }

    fn stat(&self, path: &Path) -> io::Result<Stat> {
        match self.lock().get(path) {
            Some(Node::Dir { modified, .. }) => Ok(Stat {
                is_dir: true,
                modified: Some(*modified),
            }),
            Some(_) => Ok(Stat {
                is_dir: false,
                modified: None,
            }),
            None => Err(io::ErrorKind::NotFound.into()),
        }
    }
}
