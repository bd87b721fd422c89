//! Command line interface for tinker_maven_publish.
//!
//! This module provides the CLI for bundling, publishing and resolving,
//! with argument parsing, configuration merging and user feedback.

pub mod args;
pub mod commands;
mod output;

pub use args::{Args, Command, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
///
/// Loads the configuration file, then dispatches to the subcommand.
/// Returns the process exit code.
pub fn run(args: Args) -> Result<i32> {
    let runtime_config = RuntimeConfig::from(&args);
    let cwd = std::env::current_dir()?;
    let config = crate::metadata::discover_config(args.config.as_deref(), &cwd)?;

    match &args.command {
        Command::Bundle(bundle) => commands::run_bundle(bundle, &config, &runtime_config),
        Command::Publish(publish) => commands::run_publish(publish, &config, &runtime_config),
        Command::Resolve(resolve) => commands::run_resolve(resolve, &config, &runtime_config),
    }
}
