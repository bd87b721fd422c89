//! `bundle`: locate and validate without publishing.

use super::{report_set, settings_from};
use crate::bundler::ArtifactBundler;
use crate::cli::{RuntimeConfig, args::BundleArgs};
use crate::error::Result;
use crate::metadata::PublishConfig;

/// Bundles `args.build_dir` and prints the resulting set.
///
/// Stdout receives one `<classifier>\t<path>` line per artifact, or the
/// whole set as JSON with `--json`.
pub fn run_bundle(
    args: &BundleArgs,
    config: &PublishConfig,
    runtime_config: &RuntimeConfig,
) -> Result<i32> {
    let settings = settings_from(&args.coordinates, &config.publish);
    let set = ArtifactBundler::new(settings).bundle(&args.build_dir)?;
    set.validate()?;

    if args.json {
        runtime_config.data(&serde_json::to_string_pretty(&set)?)?;
        return Ok(0);
    }

    report_set(&set, runtime_config)?;
    for (kind, path) in set.artifacts() {
        runtime_config.data(&format!("{}\t{}", kind.classifier(), path.display()))?;
    }
    Ok(0)
}
