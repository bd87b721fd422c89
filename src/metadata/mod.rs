//! Publishing configuration from `tinker-publish.toml`.
//!
//! ```toml
//! [publish]
//! group_id = "io.github.noproxy"
//! artifact_id = "demo"
//! version = "1.0.0"
//! repository = "build/repo"
//! skip_mapping = false
//!
//! [resolve]
//! version = "0.9.0"
//! ignore_mapping = false
//! # or bypass the repository:
//! # apk = "base/app-release.apk"
//! # mapping = "base/mapping.txt"
//! # symbol = "base/R.txt"
//! ```
//!
//! Relative paths are resolved against the directory of the config file.

use crate::error::{BundlerError, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tinker-publish.toml";

/// Complete configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishConfig {
    /// `[publish]` section
    #[serde(default)]
    pub publish: PublishSection,

    /// `[resolve]` section
    #[serde(default)]
    pub resolve: ResolveSection,
}

/// Coordinates and switches for publishing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublishSection {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Repository root directory.
    #[serde(default)]
    pub repository: Option<PathBuf>,
    /// Leave `mapping.txt` out (unobfuscated builds).
    #[serde(default)]
    pub skip_mapping: bool,
}

/// Base version lookup for patch builds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveSection {
    /// Version of the base build to resolve.
    #[serde(default)]
    pub version: Option<String>,
    /// Repository root, defaults to the publish repository.
    #[serde(default)]
    pub repository: Option<PathBuf>,
    /// Local base apk; when set the repository is bypassed.
    #[serde(default)]
    pub apk: Option<PathBuf>,
    #[serde(default)]
    pub mapping: Option<PathBuf>,
    #[serde(default)]
    pub symbol: Option<PathBuf>,
    #[serde(default)]
    pub ignore_mapping: bool,
}

/// Loads the config file at `path`.
pub fn load_config(path: &Path) -> Result<PublishConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    let mut config: PublishConfig = toml::from_str(&content).map_err(|e| {
        BundlerError::Cli(CliError::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    })?;

    if let Some(base) = path.parent() {
        config.rebase(base);
    }
    log::debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Loads `path` if given, else `tinker-publish.toml` in `cwd` if it exists,
/// else the defaults.
///
/// An explicitly given path must exist.
pub fn discover_config(path: Option<&Path>, cwd: &Path) -> Result<PublishConfig> {
    if let Some(path) = path {
        return load_config(path);
    }

    let default = cwd.join(CONFIG_FILE_NAME);
    if default.is_file() {
        load_config(&default)
    } else {
        log::debug!("no {} found in {}", CONFIG_FILE_NAME, cwd.display());
        Ok(PublishConfig::default())
    }
}

impl PublishConfig {
    fn rebase(&mut self, base: &Path) {
        let join = |p: &mut Option<PathBuf>| {
            if let Some(path) = p.as_mut() {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        };
        join(&mut self.publish.repository);
        join(&mut self.resolve.repository);
        join(&mut self.resolve.apk);
        join(&mut self.resolve.mapping);
        join(&mut self.resolve.symbol);
    }
}
