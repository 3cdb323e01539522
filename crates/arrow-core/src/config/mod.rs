//! Configuration management for arrow.
//!
//! User preferences ([`settings::Config`]) and picker colors
//! ([`theme::Theme`]) are stored as TOML and loaded at startup.

pub mod settings;
pub mod theme;
