//! Artifact kinds and the publishable artifact set.

use super::error::{Error, ErrorExt, Result};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// The three artifacts Tinker needs from a base build.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Application package (`*.apk`)
    Package,
    /// Obfuscation mapping (`mapping.txt`)
    Mapping,
    /// Resource ID table (`R.txt`)
    ResourceTable,
}

impl ArtifactKind {
    /// All kinds, in publishing order.
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Package,
        ArtifactKind::Mapping,
        ArtifactKind::ResourceTable,
    ];

    /// Maven classifier for this kind.
    pub fn classifier(self) -> &'static str {
        match self {
            ArtifactKind::Package => "apk",
            ArtifactKind::Mapping => "mapping",
            ArtifactKind::ResourceTable => "r-file",
        }
    }

    /// Maven extension for this kind.
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Package => "apk",
            ArtifactKind::Mapping | ArtifactKind::ResourceTable => "txt",
        }
    }

    /// Conventional file name in a build output directory.
    ///
    /// The package has no fixed name; it is matched by extension.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            ArtifactKind::Package => None,
            ArtifactKind::Mapping => Some("mapping.txt"),
            ArtifactKind::ResourceTable => Some("R.txt"),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::Package => "apk",
            ArtifactKind::Mapping => "mapping.txt",
            ArtifactKind::ResourceTable => "R.txt",
        };
        f.write_str(name)
    }
}

/// Non-fatal problem found while bundling.
///
/// The affected artifact is left out of the set and publishing continues.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum PartialArtifactWarning {
    /// Optional file not present in the build output.
    Missing { kind: ArtifactKind, path: PathBuf },
    /// Optional file present but empty.
    Empty { kind: ArtifactKind, path: PathBuf },
}

impl PartialArtifactWarning {
    /// The artifact kind that was omitted.
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::Missing { kind, .. } | Self::Empty { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for PartialArtifactWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { kind, path } => {
                write!(f, "skip publish {kind} because file not exists: {}", path.display())
            }
            Self::Empty { kind, path } => {
                write!(f, "skip publish {kind} because file is empty: {}", path.display())
            }
        }
    }
}

/// A publishable set of base-build artifacts.
///
/// Constructed once per invocation by
/// [`ArtifactBundler`](crate::bundler::ArtifactBundler) and consumed by the
/// publish step.
#[derive(Clone, Debug, Serialize)]
pub struct ArtifactSet {
    /// Maven group of the publish target.
    pub group_coordinate: String,
    /// Maven artifact id of the publish target.
    pub artifact_id: String,
    /// Version of the publish target.
    pub version: String,
    /// Application package.
    pub package_file: Option<PathBuf>,
    /// Obfuscation mapping.
    pub mapping_file: Option<PathBuf>,
    /// Resource ID table.
    pub resource_table_file: Option<PathBuf>,
    /// Optional artifacts that were left out.
    pub warnings: Vec<PartialArtifactWarning>,
}

impl ArtifactSet {
    /// Returns the file recorded for `kind`, if any.
    pub fn file(&self, kind: ArtifactKind) -> Option<&Path> {
        match kind {
            ArtifactKind::Package => self.package_file.as_deref(),
            ArtifactKind::Mapping => self.mapping_file.as_deref(),
            ArtifactKind::ResourceTable => self.resource_table_file.as_deref(),
        }
    }

    /// Present artifacts with their kinds, in publishing order.
    pub fn artifacts(&self) -> impl Iterator<Item = (ArtifactKind, &Path)> {
        ArtifactKind::ALL
            .into_iter()
            .filter_map(|kind| self.file(kind).map(|path| (kind, path)))
    }

    /// `group:artifact:version` of the publish target.
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group_coordinate, self.artifact_id, self.version
        )
    }

    /// Checks that the set can be published.
    ///
    /// At least one file must be present and every present file must exist
    /// and be non-empty.
    pub fn validate(&self) -> Result<()> {
        let mut any = false;
        for (_, path) in self.artifacts() {
            any = true;
            let metadata = match std::fs::metadata(path) {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    return Err(Error::ArtifactNotFound(path.to_path_buf()));
                }
                Err(e) => return Err(e).fs_context("reading artifact metadata", path),
            };
            if !metadata.is_file() {
                return Err(Error::ArtifactNotFound(path.to_path_buf()));
            }
            if metadata.len() == 0 {
                return Err(Error::EmptyArtifact(path.to_path_buf()));
            }
        }

        if !any {
            return Err(Error::EmptyArtifactSet(self.coordinates()));
        }
        Ok(())
    }
}
