//! tinker_maven_publish - publish Tinker base artifacts to a Maven repository.
//!
//! This binary bundles the apk, mapping.txt and R.txt of an Android base build,
//! deploys them to a Maven repository and resolves them back for patch builds.

use std::process;
use tinker_maven_publish::cli::{self, Args};

fn main() {
    let args = Args::parse_args();

    // Initialize logging; RUST_LOG still overrides the flag-derived level
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    // Run CLI and get exit code
    let exit_code = match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
