//! Artifact bundling for Tinker base builds.
//!
//! Turns a build output directory into an [`ArtifactSet`]: the application
//! package, the obfuscation mapping and the resource ID table, each tagged
//! with its Maven classifier.

mod artifact;
pub mod builder;
pub mod error;
pub mod settings;
pub mod utils;

pub use artifact::{ArtifactKind, ArtifactSet, PartialArtifactWarning};
pub use builder::ArtifactBundler;
pub use error::{Error, Result};
pub use settings::{Coordinates, Settings, SettingsBuilder};
