//! Main bundler orchestration.
//!
//! This module provides the [`ArtifactBundler`] that turns a build output
//! directory into a publishable [`ArtifactSet`].

use super::locate::{self, Located};
use crate::bundler::{ArtifactKind, ArtifactSet, Error, Result, Settings};
use std::path::{Path, PathBuf};

/// Collects the base-build artifacts Tinker needs.
///
/// # Artifacts
///
/// - **Package** (`*.apk`): mandatory, a missing package aborts bundling
/// - **Mapping** (`mapping.txt`): optional, omitted with a warning
/// - **Resource table** (`R.txt`): optional, omitted with a warning
///
/// # Examples
///
/// ```no_run
/// use tinker_maven_publish::bundler::{ArtifactBundler, SettingsBuilder};
///
/// # fn example() -> tinker_maven_publish::bundler::Result<()> {
/// let settings = SettingsBuilder::new().version("1.0.0").build();
/// let set = ArtifactBundler::new(settings).bundle("app/build/outputs/apk/release")?;
///
/// for (kind, path) in set.artifacts() {
///     println!("{}: {}", kind.classifier(), path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArtifactBundler {
    settings: Settings,
}

impl ArtifactBundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Locates and validates the artifacts in `build_output_dir`.
    ///
    /// # Errors
    ///
    /// - [`Error::NotADirectory`] if the path is not a directory
    /// - [`Error::MissingArtifact`] if no package file is present
    /// - [`Error::EmptyArtifact`] if the package file is empty
    /// - [`Error::MissingVersion`] if no version is configured
    /// - [`Error::InvalidCoordinate`] if a coordinate cannot be used as a path segment
    pub fn bundle(&self, build_output_dir: impl AsRef<Path>) -> Result<ArtifactSet> {
        let dir = build_output_dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::NotADirectory(dir.to_path_buf()));
        }

        let origin_apk = locate::find_package(dir)?;
        let coordinates = self.settings.coordinates_for(&origin_apk)?;
        let package = locate::prefer_resguard(&origin_apk)?;
        log::debug!("package for {}: {}", coordinates, package.display());

        let mut set = ArtifactSet {
            group_coordinate: coordinates.group_id,
            artifact_id: coordinates.artifact_id,
            version: coordinates.version,
            package_file: Some(package),
            mapping_file: None,
            resource_table_file: None,
            warnings: Vec::new(),
        };

        if self.settings.skip_mapping() {
            log::info!(
                "skip publish mapping.txt for '{}' because mapping is disabled",
                set.artifact_id
            );
        } else {
            let mapping = Self::optional(dir, ArtifactKind::Mapping, &mut set)?;
            set.mapping_file = mapping;
        }
        let resource_table = Self::optional(dir, ArtifactKind::ResourceTable, &mut set)?;
        set.resource_table_file = resource_table;

        Ok(set)
    }

    fn optional(
        dir: &Path,
        kind: ArtifactKind,
        set: &mut ArtifactSet,
    ) -> Result<Option<PathBuf>> {
        match locate::find_optional(dir, kind)? {
            Located::Found(path) => {
                log::debug!("found {}: {}", kind, path.display());
                Ok(Some(path))
            }
            Located::Omitted(warning) => {
                log::warn!("{} for '{}'", warning, set.artifact_id);
                set.warnings.push(warning);
                Ok(None)
            }
        }
    }
}
