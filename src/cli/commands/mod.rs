//! Command execution functions for publishing operations.

mod bundle;
mod publish;
mod resolve;

pub use bundle::run_bundle;
pub use publish::run_publish;
pub use resolve::run_resolve;

use super::args::CoordinateArgs;
use crate::bundler::{ArtifactSet, Settings, SettingsBuilder};
use crate::cli::RuntimeConfig;
use crate::metadata::PublishSection;

/// Merges command line coordinates over the `[publish]` section.
fn settings_from(args: &CoordinateArgs, publish: &PublishSection) -> Settings {
    SettingsBuilder::new()
        .merge(
            publish.group_id.clone(),
            publish.artifact_id.clone(),
            publish.version.clone(),
        )
        .merge(
            args.group_id.clone(),
            args.artifact_id.clone(),
            args.artifact_version.clone(),
        )
        .skip_mapping(args.skip_mapping_override().unwrap_or(publish.skip_mapping))
        .build()
}

/// Human-readable summary of a bundled set.
fn report_set(set: &ArtifactSet, runtime_config: &RuntimeConfig) -> std::io::Result<()> {
    runtime_config.section(&format!("Artifacts for {}", set.coordinates()))?;
    for (kind, path) in set.artifacts() {
        runtime_config.indent(&format!("{:<8} {}", kind.classifier(), path.display()))?;
    }
    for warning in &set.warnings {
        runtime_config.warn(&warning.to_string())?;
    }
    Ok(())
}
