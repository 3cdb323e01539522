//! Navigation logic for arrow.
//!
//! This module contains the [`model::NavigationModel`] state machine, entry
//! ordering and fuzzy [`filter`]ing, the scrolling [`viewport`], and the
//! render-ready [`view`] snapshot.

pub mod filter;
pub mod model;
pub mod view;
pub mod viewport;

pub use filter::{fuzzy_filter, sort_entries, Order};
pub use model::{NavigationModel, Step};
pub use view::{Body, DisplayRow, Footer, Header, PickerView};
pub use viewport::{window, Window};
