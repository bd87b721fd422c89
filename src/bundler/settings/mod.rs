//! Configuration structures for bundling operations.
//!
//! This module provides the publish coordinates and bundling options,
//! plus a builder for constructing them.

mod builder;
mod coordinates;
mod core;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use coordinates::{Coordinates, DEFAULT_GROUP_ID};
pub use core::Settings;
