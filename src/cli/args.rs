//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap. Every coordinate
//! flag can also come from the environment or from `tinker-publish.toml`;
//! flags win over the environment, which wins over the file.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Publish the base artifacts required by Tencent Tinker
#[derive(Parser, Debug)]
#[command(
    name = "tinker_maven_publish",
    version,
    about = "Publish artifacts (android apk, mapping.txt and R.txt) required by Tencent Tinker",
    long_about = "Collects the application package, obfuscation mapping and resource ID table of an
Android base build and publishes them to a Maven repository, so that later patch builds
can resolve them by version.

Usage:
  tinker_maven_publish bundle app/build/outputs/apk/release --version 1.0.0
  tinker_maven_publish publish app/build/outputs/apk/release --version 1.0.0 --repository ./repo
  tinker_maven_publish resolve --base-version 1.0.0 --artifact-id app --repository ./repo

Exit code 0 = every mandatory artifact was found."
)]
pub struct Args {
    /// Configuration file (default: ./tinker-publish.toml when present)
    #[arg(short, long, global = true, env = "TINKER_PUBLISH_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Locate and validate the artifacts of a build output directory
    Bundle(BundleArgs),
    /// Bundle and deploy the artifacts into a Maven repository
    Publish(PublishArgs),
    /// Resolve the base artifacts of a published version
    Resolve(ResolveArgs),
}

/// Coordinates of the publication.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CoordinateArgs {
    /// Maven group (default: org.tinker.app)
    #[arg(long, env = "TINKER_PUBLISH_GROUP_ID", value_name = "GROUP")]
    pub group_id: Option<String>,

    /// Maven artifact id (default: apk file name without extension)
    #[arg(long, env = "TINKER_PUBLISH_ARTIFACT_ID", value_name = "ARTIFACT")]
    pub artifact_id: Option<String>,

    /// Version to publish
    #[arg(long = "version", env = "TINKER_PUBLISH_VERSION", value_name = "VERSION")]
    pub artifact_version: Option<String>,

    /// Leave mapping.txt out (unobfuscated builds)
    #[arg(long, overrides_with = "no_skip_mapping")]
    pub skip_mapping: bool,

    /// Publish mapping.txt even if the config file skips it
    #[arg(long, overrides_with = "skip_mapping")]
    pub no_skip_mapping: bool,
}

impl CoordinateArgs {
    /// `--skip-mapping` / `--no-skip-mapping`, last one wins. None when neither is given.
    pub fn skip_mapping_override(&self) -> Option<bool> {
        if self.skip_mapping {
            Some(true)
        } else if self.no_skip_mapping {
            Some(false)
        } else {
            None
        }
    }
}

/// Arguments of `bundle`.
#[derive(ClapArgs, Debug)]
pub struct BundleArgs {
    /// Build output directory containing the .apk, mapping.txt and R.txt
    #[arg(value_name = "BUILD_DIR")]
    pub build_dir: PathBuf,

    #[command(flatten)]
    pub coordinates: CoordinateArgs,

    /// Print the artifact set as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `publish`.
#[derive(ClapArgs, Debug)]
pub struct PublishArgs {
    /// Build output directory containing the .apk, mapping.txt and R.txt
    #[arg(value_name = "BUILD_DIR")]
    pub build_dir: PathBuf,

    #[command(flatten)]
    pub coordinates: CoordinateArgs,

    /// Maven repository root (default: ~/.m2/repository)
    #[arg(short, long, env = "TINKER_PUBLISH_REPOSITORY", value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Print the deployed files as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `resolve`.
#[derive(ClapArgs, Debug)]
pub struct ResolveArgs {
    /// Version of the base build
    #[arg(long, env = "TINKER_RESOLVE_VERSION", value_name = "VERSION")]
    pub base_version: Option<String>,

    /// Maven group (default: org.tinker.app)
    #[arg(long, env = "TINKER_PUBLISH_GROUP_ID", value_name = "GROUP")]
    pub group_id: Option<String>,

    /// Maven artifact id
    #[arg(long, env = "TINKER_PUBLISH_ARTIFACT_ID", value_name = "ARTIFACT")]
    pub artifact_id: Option<String>,

    /// Maven repository root (default: publish repository, then ~/.m2/repository)
    #[arg(short, long, env = "TINKER_RESOLVE_REPOSITORY", value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Local base apk, bypasses the repository
    #[arg(long, value_name = "PATH")]
    pub apk: Option<PathBuf>,

    /// Local base mapping.txt (with --apk)
    #[arg(long, value_name = "PATH", requires = "apk")]
    pub mapping: Option<PathBuf>,

    /// Local base R.txt (with --apk)
    #[arg(long, value_name = "PATH", requires = "apk")]
    pub symbol: Option<PathBuf>,

    /// Do not resolve mapping.txt
    #[arg(long)]
    pub ignore_mapping: bool,

    /// Print the resolved paths as JSON
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter implied by `--verbose` / `--quiet`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }

    /// Print machine-readable output, never suppressed
    pub fn data(&self, message: &str) -> std::io::Result<()> {
        self.output.data(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn publish_flags_parse() {
        let args = Args::try_parse_from([
            "tinker_maven_publish",
            "publish",
            "out",
            "--version",
            "1.0",
            "--repository",
            "repo",
            "--skip-mapping",
        ])
        .unwrap();

        match args.command {
            Command::Publish(publish) => {
                assert_eq!(publish.coordinates.artifact_version.as_deref(), Some("1.0"));
                assert_eq!(publish.repository, Some(PathBuf::from("repo")));
                assert!(publish.coordinates.skip_mapping);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn last_skip_mapping_flag_wins() {
        let parse = |flags: &[&str]| {
            let mut argv = vec!["tinker_maven_publish", "bundle", "out"];
            argv.extend_from_slice(flags);
            match Args::try_parse_from(argv).unwrap().command {
                Command::Bundle(bundle) => bundle.coordinates.skip_mapping_override(),
                other => panic!("unexpected command: {other:?}"),
            }
        };

        assert_eq!(parse(&[]), None);
        assert_eq!(parse(&["--no-skip-mapping"]), Some(false));
        assert_eq!(parse(&["--no-skip-mapping", "--skip-mapping"]), Some(true));
        assert_eq!(parse(&["--skip-mapping", "--no-skip-mapping"]), Some(false));
    }

    #[test]
    fn local_mapping_requires_apk() {
        let result = Args::try_parse_from([
            "tinker_maven_publish",
            "resolve",
            "--mapping",
            "mapping.txt",
        ]);
        assert!(result.is_err());
    }
}
