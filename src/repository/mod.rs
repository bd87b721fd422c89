//! File-system Maven repository.
//!
//! Publishes an [`ArtifactSet`](crate::bundler::ArtifactSet) using the
//! standard Maven layout and resolves base artifacts back out of it.
//!
//! ```text
//! <root>/<group as path>/<artifact>/maven-metadata.xml
//! <root>/<group as path>/<artifact>/<version>/<artifact>-<version>.pom
//! <root>/<group as path>/<artifact>/<version>/<artifact>-<version>-apk.apk
//! <root>/<group as path>/<artifact>/<version>/<artifact>-<version>-mapping.txt
//! <root>/<group as path>/<artifact>/<version>/<artifact>-<version>-r-file.txt
//! ```

mod deploy;
mod metadata;
mod pom;
mod resolve;

pub use deploy::DeployedArtifact;
pub use resolve::{ResolveSource, ResolvedBase, Resolver};

use crate::bundler::{ArtifactKind, Coordinates};
use std::path::{Path, PathBuf};

/// A Maven repository rooted at a local directory.
#[derive(Clone, Debug)]
pub struct MavenRepository {
    root: PathBuf,
}

impl MavenRepository {
    /// Opens the repository at `root`. The directory is created on first deploy.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The user's local repository, `~/.m2/repository`.
    pub fn maven_local() -> Option<Self> {
        dirs::home_dir().map(|home| Self::new(home.join(".m2").join("repository")))
    }

    /// Repository root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every version of an artifact.
    pub fn artifact_dir(&self, coords: &Coordinates) -> PathBuf {
        let mut dir = self.root.clone();
        for segment in coords.group_id.split('.').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir.join(&coords.artifact_id)
    }

    /// Directory holding one version of an artifact.
    pub fn version_dir(&self, coords: &Coordinates) -> PathBuf {
        self.artifact_dir(coords).join(&coords.version)
    }

    /// Location of one artifact file.
    pub fn artifact_path(&self, coords: &Coordinates, kind: ArtifactKind) -> PathBuf {
        self.version_dir(coords)
            .join(coords.artifact_file_name(kind))
    }

    /// Location of the POM.
    pub fn pom_path(&self, coords: &Coordinates) -> PathBuf {
        self.version_dir(coords).join(coords.pom_file_name())
    }

    /// Location of the artifact-level `maven-metadata.xml`.
    pub fn metadata_path(&self, coords: &Coordinates) -> PathBuf {
        self.artifact_dir(coords).join("maven-metadata.xml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_dots_become_directories() {
        let repo = MavenRepository::new("/repo");
        let coords = Coordinates::new("io.github.noproxy", "app", "1.0");

        assert_eq!(
            repo.artifact_path(&coords, ArtifactKind::Mapping),
            PathBuf::from("/repo/io/github/noproxy/app/1.0/app-1.0-mapping.txt")
        );
        assert_eq!(
            repo.metadata_path(&coords),
            PathBuf::from("/repo/io/github/noproxy/app/maven-metadata.xml")
        );
    }
}
