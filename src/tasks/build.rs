//! `build`: release compilation.

use std::path::PathBuf;

use super::run_command;
use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::error::TaskError;
use crate::ports::shell::CommandLine;

/// `cargo build --release` plus any configured extra arguments.
#[must_use]
pub fn command(config: &TasksConfig) -> CommandLine {
    CommandLine::new(&config.cargo)
        .args(["build", "--release"])
        .args(config.build_args.iter().cloned())
}

/// Where the release build leaves the binary for `app`.
#[must_use]
pub fn artifact_path(config: &TasksConfig, app: &str) -> PathBuf {
    config.target_dir.join(format!("{app}{}", std::env::consts::EXE_SUFFIX))
}

/// Runs the release build.
///
/// # Errors
///
/// Returns an error if the toolchain cannot be started or exits non-zero.
pub fn run(ctx: &ServiceContext, config: &TasksConfig) -> Result<(), TaskError> {
    run_command(ctx, "build", &command(config))
}
