//! `resolve`: find the base artifacts of a published version.

use crate::bundler::{Coordinates, settings::DEFAULT_GROUP_ID};
use crate::cli::{RuntimeConfig, args::ResolveArgs};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata::PublishConfig;
use crate::repository::{MavenRepository, ResolveSource, Resolver};

pub fn run_resolve(
    args: &ResolveArgs,
    config: &PublishConfig,
    runtime_config: &RuntimeConfig,
) -> Result<i32> {
    let source = resolve_source(args, config)?;
    let resolver = Resolver::new(source)
        .ignore_mapping(args.ignore_mapping || config.resolve.ignore_mapping);

    let Some(base) = resolver.resolve_all()? else {
        runtime_config.warn("skip setup old apk for tinker because no base version is set")?;
        return Ok(0);
    };

    if args.json {
        runtime_config.data(&serde_json::to_string_pretty(&base)?)?;
        return Ok(0);
    }

    runtime_config.data(&format!("apk\t{}", base.apk.display()))?;
    if let Some(mapping) = &base.mapping {
        runtime_config.data(&format!("mapping\t{}", mapping.display()))?;
    }
    if let Some(symbol) = &base.symbol {
        runtime_config.data(&format!("r-file\t{}", symbol.display()))?;
    }
    Ok(0)
}

/// Local files win over the repository when a base apk path is given.
fn resolve_source(args: &ResolveArgs, config: &PublishConfig) -> Result<ResolveSource> {
    if let Some(apk) = args.apk.clone().or_else(|| config.resolve.apk.clone()) {
        return Ok(ResolveSource::Local {
            apk,
            mapping: args.mapping.clone().or_else(|| config.resolve.mapping.clone()),
            symbol: args.symbol.clone().or_else(|| config.resolve.symbol.clone()),
        });
    }

    let repository = match args
        .repository
        .clone()
        .or_else(|| config.resolve.repository.clone())
        .or_else(|| config.publish.repository.clone())
    {
        Some(root) => MavenRepository::new(root),
        None => MavenRepository::maven_local().ok_or_else(|| {
            BundlerError::Cli(CliError::MissingArgument {
                argument: "--repository (no home directory for ~/.m2/repository)".to_string(),
            })
        })?,
    };

    let version = args
        .base_version
        .clone()
        .or_else(|| config.resolve.version.clone());
    let Some(version) = version else {
        return Ok(ResolveSource::Maven {
            repository,
            coordinates: None,
        });
    };

    let artifact_id = args
        .artifact_id
        .clone()
        .or_else(|| config.publish.artifact_id.clone())
        .ok_or_else(|| {
            BundlerError::Cli(CliError::MissingArgument {
                argument: "--artifact-id".to_string(),
            })
        })?;
    let group_id = args
        .group_id
        .clone()
        .or_else(|| config.publish.group_id.clone())
        .unwrap_or_else(|| DEFAULT_GROUP_ID.to_string());

    let coordinates = Coordinates::new(group_id, artifact_id, version);
    coordinates.validate()?;

    Ok(ResolveSource::Maven {
        repository,
        coordinates: Some(coordinates),
    })
}
