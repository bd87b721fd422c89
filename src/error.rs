//! Top-level error types for the command line tool.
//!
//! Domain failures live in [`crate::bundler::Error`]; this module wraps them
//! together with configuration and argument errors.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Missing required argument
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Configuration file could not be used
    #[error("Invalid configuration {path}: {reason}")]
    InvalidConfig {
        /// Config file path
        path: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as E;
        match self {
            BundlerError::Bundler(E::MissingArtifact { .. }) => vec![
                "Run the Android assemble task before publishing".to_string(),
                "Point --build-dir at the directory containing the .apk".to_string(),
            ],
            BundlerError::Bundler(E::InvalidCoordinate { .. }) => vec![
                "Use plain names for --group-id, --artifact-id and --version".to_string(),
            ],
            BundlerError::Bundler(E::MissingVersion) => vec![
                "Pass --version, set TINKER_PUBLISH_VERSION, or set publish.version in tinker-publish.toml"
                    .to_string(),
            ],
            BundlerError::Bundler(E::BaseApkNotFound(_)) => vec![
                "Check that the base version was published with `tinker_maven_publish publish`"
                    .to_string(),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
