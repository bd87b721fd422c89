//! Resolving the base artifacts of a previously published version.
//!
//! Tinker diffs a new build against a base build. The base apk is
//! mandatory; the mapping and resource table improve the patch but the
//! build can continue without them.

use super::MavenRepository;
use crate::bundler::{ArtifactKind, Coordinates, Error, Result};
use path_absolutize::Absolutize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where base artifacts come from.
#[derive(Clone, Debug)]
pub enum ResolveSource {
    /// Published artifacts in a Maven repository.
    ///
    /// `coordinates` is `None` when no base version is configured, which
    /// disables resolution.
    Maven {
        repository: MavenRepository,
        coordinates: Option<Coordinates>,
    },
    /// Explicit local files, bypassing the repository.
    Local {
        apk: PathBuf,
        mapping: Option<PathBuf>,
        symbol: Option<PathBuf>,
    },
}

/// Absolute paths of the resolved base artifacts.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedBase {
    pub apk: PathBuf,
    pub mapping: Option<PathBuf>,
    pub symbol: Option<PathBuf>,
}

/// Resolves base artifacts from a [`ResolveSource`].
#[derive(Clone, Debug)]
pub struct Resolver {
    source: ResolveSource,
    ignore_mapping: bool,
}

impl Resolver {
    pub fn new(source: ResolveSource) -> Self {
        match &source {
            ResolveSource::Local { apk, .. } => {
                log::info!("use local apk file for tinker: {}", apk.display())
            }
            ResolveSource::Maven {
                coordinates: Some(coords),
                ..
            } => log::info!("use maven resolve apk for tinker, version: {}", coords.version),
            ResolveSource::Maven { .. } => {}
        }
        Self {
            source,
            ignore_mapping: false,
        }
    }

    /// Skips mapping resolution entirely.
    pub fn ignore_mapping(mut self, ignore: bool) -> Self {
        self.ignore_mapping = ignore;
        self
    }

    /// Resolves the base apk.
    ///
    /// Returns `Ok(None)` only when no base version is configured.
    ///
    /// # Errors
    ///
    /// [`Error::BaseApkNotFound`] or [`Error::ArtifactNotFound`] when the
    /// apk is configured but absent.
    pub fn resolve_apk(&self) -> Result<Option<PathBuf>> {
        match &self.source {
            ResolveSource::Maven {
                coordinates: None, ..
            } => Ok(None),
            ResolveSource::Maven {
                repository,
                coordinates: Some(coords),
            } => {
                coords.validate()?;
                let path = repository.artifact_path(coords, ArtifactKind::Package);
                if !path.is_file() {
                    return Err(Error::BaseApkNotFound(path));
                }
                absolute(&path).map(Some)
            }
            ResolveSource::Local { apk, .. } => {
                if !apk.is_file() {
                    return Err(Error::ArtifactNotFound(apk.clone()));
                }
                absolute(apk).map(Some)
            }
        }
    }

    /// Resolves the base `mapping.txt`, if available.
    pub fn resolve_mapping(&self) -> Result<Option<PathBuf>> {
        if self.ignore_mapping {
            log::warn!("skip resolving the mapping.txt file because ignore_mapping = true");
            return Ok(None);
        }
        self.resolve_optional(ArtifactKind::Mapping)
    }

    /// Resolves the base `R.txt`, if available.
    pub fn resolve_symbol(&self) -> Result<Option<PathBuf>> {
        self.resolve_optional(ArtifactKind::ResourceTable)
    }

    /// Resolves all three artifacts.
    ///
    /// Returns `Ok(None)` when no base version is configured.
    pub fn resolve_all(&self) -> Result<Option<ResolvedBase>> {
        let Some(apk) = self.resolve_apk()? else {
            log::info!("skip resolving base artifacts because no base version is set");
            return Ok(None);
        };

        Ok(Some(ResolvedBase {
            apk,
            mapping: self.resolve_mapping()?,
            symbol: self.resolve_symbol()?,
        }))
    }

    fn resolve_optional(&self, kind: ArtifactKind) -> Result<Option<PathBuf>> {
        let candidate = match &self.source {
            ResolveSource::Maven {
                coordinates: None, ..
            } => return Ok(None),
            ResolveSource::Maven {
                repository,
                coordinates: Some(coords),
            } => {
                coords.validate()?;
                Some(repository.artifact_path(coords, kind))
            }
            ResolveSource::Local {
                mapping, symbol, ..
            } => match kind {
                ArtifactKind::Mapping => mapping.clone(),
                ArtifactKind::ResourceTable => symbol.clone(),
                ArtifactKind::Package => None,
            },
        };

        match candidate {
            Some(path) if path.is_file() => absolute(&path).map(Some),
            _ => {
                log::warn!(
                    "can not find the {kind} file, continue build without {kind} file."
                );
                Ok(None)
            }
        }
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(path.absolutize()?.into_owned())
}
