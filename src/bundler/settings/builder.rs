//! Builder for constructing Settings.

use super::Settings;

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building bundler settings.
///
/// # Examples
///
/// ```no_run
/// use tinker_maven_publish::bundler::SettingsBuilder;
///
/// let settings = SettingsBuilder::new()
///     .artifact_id("demo")
///     .version("1.0.0")
///     .skip_mapping(true)
///     .build();
/// ```
///
/// # See Also
///
/// - [`Settings`] - The built settings struct
#[derive(Default)]
pub struct SettingsBuilder {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    skip_mapping: bool,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the Maven group.
    ///
    /// Default: `org.tinker.app`
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Sets the Maven artifact id.
    ///
    /// Default: the package file stem
    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    /// Sets the version to publish.
    ///
    /// # Required
    ///
    /// Bundling fails without a version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Applies optional values, leaving unset ones untouched.
    pub fn merge(
        mut self,
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: Option<String>,
    ) -> Self {
        self.group_id = group_id.or(self.group_id);
        self.artifact_id = artifact_id.or(self.artifact_id);
        self.version = version.or(self.version);
        self
    }

    /// Skips the mapping file.
    ///
    /// Default: false
    pub fn skip_mapping(mut self, skip: bool) -> Self {
        self.skip_mapping = skip;
        self
    }

    /// Builds the settings.
    pub fn build(self) -> Settings {
        Settings::new(
            self.group_id,
            self.artifact_id,
            self.version,
            self.skip_mapping,
        )
    }
}
