//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so arrow works without a config file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;
use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
///
/// Call [`Config::load`] to read from a TOML path, or
/// [`Config::load_or_default`] for the startup path that never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path` if it exists, falling back to defaults otherwise.
    ///
    /// A missing file is silent; any other failure is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!("loaded config from {}", path.display());
                config
            }
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// `$HOME/.config/arrow/config.toml`, or `None` when `HOME` is unset.
    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("arrow")
                .join("config.toml")
        })
    }
}

/// Browsing preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub show_hidden: bool,
    #[serde(default)]
    pub show_icons: bool,
}
