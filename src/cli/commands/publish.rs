//! `publish`: bundle, then deploy into a Maven repository.

use super::{report_set, settings_from};
use crate::bundler::ArtifactBundler;
use crate::cli::{RuntimeConfig, args::PublishArgs};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata::PublishConfig;
use crate::repository::MavenRepository;

pub fn run_publish(
    args: &PublishArgs,
    config: &PublishConfig,
    runtime_config: &RuntimeConfig,
) -> Result<i32> {
    let repository = match args
        .repository
        .clone()
        .or_else(|| config.publish.repository.clone())
    {
        Some(root) => MavenRepository::new(root),
        None => MavenRepository::maven_local().ok_or_else(|| {
            BundlerError::Cli(CliError::MissingArgument {
                argument: "--repository (no home directory for ~/.m2/repository)".to_string(),
            })
        })?,
    };

    let settings = settings_from(&args.coordinates, &config.publish);
    let set = ArtifactBundler::new(settings).bundle(&args.build_dir)?;
    report_set(&set, runtime_config)?;

    let deployed = repository.deploy(&set)?;

    if args.json {
        runtime_config.data(&serde_json::to_string_pretty(&deployed)?)?;
        return Ok(0);
    }

    runtime_config.success(&format!(
        "Published {} to {}",
        set.coordinates(),
        repository.root().display()
    ))?;
    for artifact in &deployed {
        runtime_config.verbose_println(&format!(
            "  {} bytes, sha256 {}",
            artifact.size, artifact.checksum
        ))?;
        runtime_config.data(&artifact.path.display().to_string())?;
    }
    Ok(0)
}
