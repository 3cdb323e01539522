//! arrow core library: UI-agnostic directory browsing logic.
//!
//! `arrow-core` lists directories, filters and orders them, and drives the
//! navigation state machine. It knows nothing about terminals; the
//! `arrow-tui` binary renders the [`PickerView`] it produces.
//!
//! # Modules
//!
//! - [`fs`]: filesystem access, [`PathNode`], [`Entry`] and the directory lister.
//! - [`nav`]: ordering, fuzzy filtering, the viewport and [`NavigationModel`].
//! - [`config`]: TOML settings and theme colors.
//! - [`event`]: [`Command`]s sent from the UI to the core.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;

#[cfg(test)]
mod test_support;

pub use config::settings::{Config, GeneralConfig};
pub use config::theme::{parse_color, Theme};
pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use fs::ops::list_directories;
pub use fs::{clean_path, Entry, FileSystem, LocalFs, PathNode};
pub use nav::filter::{fuzzy_filter, sort_entries, Order};
pub use nav::model::{NavigationModel, Step};
pub use nav::view::{Body, DisplayRow, Footer, Header, PickerView};
pub use nav::viewport::{window, Window};
