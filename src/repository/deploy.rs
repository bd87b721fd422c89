//! Deploying an artifact set into the repository.

use super::{MavenRepository, metadata, pom};
use crate::bundler::{
    ArtifactKind, ArtifactSet, Coordinates, Result,
    error::ErrorExt,
    builder::checksum::{Checksums, calculate_checksums},
    utils::fs,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One file written to the repository.
#[derive(Clone, Debug, Serialize)]
pub struct DeployedArtifact {
    /// Artifact kind, `None` for the POM.
    pub kind: Option<ArtifactKind>,
    /// Location inside the repository.
    pub path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Hex-encoded SHA-256.
    pub checksum: String,
}

impl MavenRepository {
    /// Publishes `set` into this repository.
    ///
    /// Copies every present artifact to its layout path, writes the POM,
    /// `.md5`/`.sha1` sidecars for each file, and records the version in
    /// `maven-metadata.xml`. Redeploying a version overwrites it.
    ///
    /// # Errors
    ///
    /// Fails without touching the repository if the set does not validate
    /// or its coordinates would escape the repository root.
    pub fn deploy(&self, set: &ArtifactSet) -> Result<Vec<DeployedArtifact>> {
        set.validate()?;

        let coords = Coordinates::new(
            set.group_coordinate.clone(),
            set.artifact_id.clone(),
            set.version.clone(),
        );
        coords.validate()?;
        log::info!("publishing {} to {}", coords, self.root().display());

        let mut deployed = Vec::new();

        let pom_path = self.pom_path(&coords);
        fs::write_file(&pom_path, pom::render_pom(&coords)?)?;
        deployed.push(self.finish(None, pom_path)?);

        for (kind, source) in set.artifacts() {
            let target = self.artifact_path(&coords, kind);
            log::debug!("{} -> {}", source.display(), target.display());
            fs::copy_file(source, &target)?;
            deployed.push(self.finish(Some(kind), target)?);
        }

        metadata::record_version(&self.metadata_path(&coords), &coords, chrono::Utc::now())?;

        Ok(deployed)
    }

    /// Writes checksum sidecars for a file already in place.
    fn finish(&self, kind: Option<ArtifactKind>, path: PathBuf) -> Result<DeployedArtifact> {
        let Checksums { md5, sha1, sha256 } = calculate_checksums(&path)?;
        fs::write_file(&sidecar(&path, "md5"), md5)?;
        fs::write_file(&sidecar(&path, "sha1"), sha1)?;

        let size = std::fs::metadata(&path)
            .fs_context("reading artifact metadata", &path)?
            .len();

        Ok(DeployedArtifact {
            kind,
            path,
            size,
            checksum: sha256,
        })
    }
}

fn sidecar(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
