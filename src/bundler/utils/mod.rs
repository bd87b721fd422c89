//! Shared helpers for bundling and publishing.

pub mod fs;
