//! Core Settings struct and implementations.

use super::{Coordinates, DEFAULT_GROUP_ID};
use crate::bundler::error::{Error, Result};
use std::path::Path;

/// Main settings for bundling operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// Carries the publish coordinates and bundling switches.
///
/// # Examples
///
/// ```no_run
/// use tinker_maven_publish::bundler::SettingsBuilder;
///
/// let settings = SettingsBuilder::new()
///     .group_id("io.github.noproxy")
///     .artifact_id("demo")
///     .version("1.0.0")
///     .build();
/// assert_eq!(settings.group_id(), "io.github.noproxy");
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Maven group. None means [`DEFAULT_GROUP_ID`].
    group_id: Option<String>,

    /// Maven artifact id. None means derive it from the package file.
    artifact_id: Option<String>,

    /// Version to publish.
    version: Option<String>,

    /// Leave `mapping.txt` out on purpose (unobfuscated builds).
    skip_mapping: bool,
}

impl Settings {
    /// Returns the group, falling back to [`DEFAULT_GROUP_ID`].
    pub fn group_id(&self) -> &str {
        self.group_id.as_deref().unwrap_or(DEFAULT_GROUP_ID)
    }

    /// Whether the mapping file is skipped.
    pub fn skip_mapping(&self) -> bool {
        self.skip_mapping
    }

    /// Resolves full coordinates for a located package file.
    ///
    /// The artifact id defaults to the package file stem.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingVersion`] if no version is configured
    /// - [`Error::InvalidCoordinate`] if a part is not a plain path segment
    pub fn coordinates_for(&self, package_file: &Path) -> Result<Coordinates> {
        let version = self
            .version
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .ok_or(Error::MissingVersion)?;

        let artifact_id = match &self.artifact_id {
            Some(id) => id.clone(),
            None => package_file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    Error::GenericError(format!(
                        "cannot derive artifact id from {}",
                        package_file.display()
                    ))
                })?,
        };

        let coordinates = Coordinates::new(self.group_id(), artifact_id, version);
        coordinates.validate()?;
        Ok(coordinates)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: Option<String>,
        skip_mapping: bool,
    ) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
            skip_mapping,
        }
    }
}
