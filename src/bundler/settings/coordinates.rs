//! Maven coordinates of a published artifact set.

use crate::bundler::{ArtifactKind, Error, Result};
use serde::Serialize;

/// Group used when none is configured.
pub const DEFAULT_GROUP_ID: &str = "org.tinker.app";

/// Fully resolved `group:artifact:version` of a publication.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Coordinates {
    /// Maven group, dot separated.
    pub group_id: String,
    /// Maven artifact id.
    pub artifact_id: String,
    /// Version string. Not required to be semver.
    pub version: String,
}

impl Coordinates {
    /// Creates coordinates from their parts.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Checks that every part can be used as a repository path segment.
    ///
    /// Each dot-separated part of the group is checked on its own.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCoordinate`] for empty parts, path separators, `.` or `..`.
    pub fn validate(&self) -> Result<()> {
        check_segment("group id", &self.group_id)?;
        if self.group_id.split('.').any(str::is_empty) {
            return Err(Error::InvalidCoordinate {
                field: "group id",
                value: self.group_id.clone(),
            });
        }
        check_segment("artifact id", &self.artifact_id)?;
        check_segment("version", &self.version)
    }

    /// Gradle-style dependency notation for one artifact of this publication.
    ///
    /// ```
    /// use tinker_maven_publish::bundler::{ArtifactKind, Coordinates};
    ///
    /// let coords = Coordinates::new("org.tinker.app", "demo", "1.0");
    /// assert_eq!(
    ///     coords.dependency_notation(ArtifactKind::Mapping),
    ///     "org.tinker.app:demo:1.0:mapping@txt"
    /// );
    /// ```
    pub fn dependency_notation(&self, kind: ArtifactKind) -> String {
        format!(
            "{}:{}:{}:{}@{}",
            self.group_id,
            self.artifact_id,
            self.version,
            kind.classifier(),
            kind.extension()
        )
    }

    /// File name of `kind` inside the version directory.
    pub fn artifact_file_name(&self, kind: ArtifactKind) -> String {
        format!(
            "{}-{}-{}.{}",
            self.artifact_id,
            self.version,
            kind.classifier(),
            kind.extension()
        )
    }

    /// File name of the POM inside the version directory.
    pub fn pom_file_name(&self) -> String {
        format!("{}-{}.pom", self.artifact_id, self.version)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

fn check_segment(field: &'static str, value: &str) -> Result<()> {
    let usable = !value.trim().is_empty()
        && value != "."
        && value != ".."
        && !value.contains(['/', '\\', '\0']);
    if usable {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_like_coordinates_are_rejected() {
        for (group, artifact, version) in [
            ("org.tinker.app", "../../../escaped", "1"),
            ("org.tinker.app", "app", ".."),
            ("org.tinker.app", "app", "1/2"),
            ("org.tinker.app", "", "1"),
            ("org..app", "app", "1"),
            ("../org", "app", "1"),
            ("org.tinker.app", "app", "dir\\1"),
        ] {
            let err = Coordinates::new(group, artifact, version).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidCoordinate { .. }), "{err:?}");
        }

        Coordinates::new("io.github.noproxy", "app", "1.0-beta+2")
            .validate()
            .unwrap();
    }

    #[test]
    fn file_names_carry_classifier() {
        let coords = Coordinates::new("io.github.noproxy", "app", "2.1.0");
        assert_eq!(
            coords.artifact_file_name(ArtifactKind::Package),
            "app-2.1.0-apk.apk"
        );
        assert_eq!(
            coords.artifact_file_name(ArtifactKind::ResourceTable),
            "app-2.1.0-r-file.txt"
        );
        assert_eq!(coords.pom_file_name(), "app-2.1.0.pom");
        assert_eq!(coords.to_string(), "io.github.noproxy:app:2.1.0");
    }
}
