//! File system abstractions for arrow.
//!
//! This module provides the [`source::FileSystem`] read primitive, the
//! [`node::PathNode`] path handle, the [`entry::Entry`] listing result, and
//! the directory lister ([`ops::list_directories`]).

pub mod entry;
pub mod node;
pub mod ops;
pub mod source;

pub use entry::Entry;
pub use node::{clean_path, PathNode};
pub use source::{ChildInfo, ChildKind, FileSystem, LocalFs, Stat};
