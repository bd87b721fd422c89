//! Publishing library for Tencent Tinker base artifacts.
//!
//! This library provides the core functionality for:
//! - Bundling the apk, mapping.txt and R.txt of an Android build output
//! - Deploying them into a Maven repository layout
//! - Resolving a published base version for patch builds
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;
pub mod repository;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
