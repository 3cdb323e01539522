//! Error types for `arrow-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// The path-carrying variants together form the listing-error family: they
/// are the only errors the navigation model ever surfaces to the user.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            std::io::ErrorKind::NotADirectory => CoreError::NotADirectory(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `arrow-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "path not found: /missing/dir");
    }

    #[test]
    fn permission_denied_displays_path() {
        let err = CoreError::PermissionDenied(PathBuf::from("/root"));
        assert_eq!(err.to_string(), "permission denied: /root");
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = CoreError::NotADirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(err.to_string(), "not a directory: /etc/hosts");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn from_io_classifies_kinds() {
        let path = Path::new("/x");
        let err = CoreError::from_io(path, io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(matches!(err, CoreError::NotFound(p) if p == path));

        let err = CoreError::from_io(path, io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert!(matches!(err, CoreError::PermissionDenied(_)));

        let err = CoreError::from_io(path, io::Error::new(io::ErrorKind::NotADirectory, "file"));
        assert!(matches!(err, CoreError::NotADirectory(_)));
    }

    #[test]
    fn from_io_falls_back_to_io() {
        let err = CoreError::from_io(
            Path::new("/x"),
            io::Error::new(io::ErrorKind::Other, "weird"),
        );
        assert!(matches!(err, CoreError::Io(_)));
        assert!(err.to_string().contains("weird"));
    }

    #[test]
    fn io_error_from_std() {
        let io_err = io::Error::new(io::ErrorKind::Interrupted, "stop");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
    }
}
