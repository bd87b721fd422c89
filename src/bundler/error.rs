//! Error types for artifact bundling and repository operations.
//!
//! Every fallible operation in [`crate::bundler`] and [`crate::repository`]
//! returns [`Result`]. File system failures carry the path and the action
//! that failed via [`ErrorExt::fs_context`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while bundling, deploying or resolving artifacts.
#[derive(Debug, Error)]
pub enum Error {
    /// The mandatory application package was not found.
    #[error("no application package (*.apk) found in {}", .dir.display())]
    MissingArtifact {
        /// Directory that was searched
        dir: PathBuf,
    },

    /// A coordinate cannot be used as a repository path segment.
    #[error("invalid {field} '{value}': must be non-empty without path separators, '.' or '..'")]
    InvalidCoordinate {
        /// Which coordinate
        field: &'static str,
        /// Offending value
        value: String,
    },

    /// A mandatory artifact exists but has no content.
    #[error("artifact is empty: {}", .0.display())]
    EmptyArtifact(PathBuf),

    /// A present artifact reference points at nothing.
    #[error("artifact does not exist: {}", .0.display())]
    ArtifactNotFound(PathBuf),

    /// The artifact set carries no file at all.
    #[error("artifact set for {0} contains no files, nothing to publish")]
    EmptyArtifactSet(String),

    /// The build output path is not a directory.
    #[error("build output path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// No version was configured for publishing.
    #[error("you must set a version to publish")]
    MissingVersion,

    /// The base apk could not be found in the repository.
    #[error("cannot find base apk file in Maven repository: {}", .0.display())]
    BaseApkNotFound(PathBuf),

    /// File system operation failed.
    #[error("{context} {}: {source}", .path.display())]
    Fs {
        /// What was being done
        context: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Raw I/O error without path context.
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("{0}")]
    WalkDir(#[from] walkdir::Error),

    /// POM template rendering failed.
    #[error("template error: {0}")]
    Template(String),

    /// Catch-all.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches path context to I/O results.
pub trait ErrorExt<T> {
    /// Wraps the error with the action being performed and the path involved.
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}
