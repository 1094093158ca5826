//! `deploy`: ship one built binary to `HOSTNAME:~/projects/chat-APP`.

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use super::{build, run_command, DeployParams};
use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::error::TaskError;
use crate::ports::shell::CommandLine;

/// Remote host and directory that receive the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDestination {
    /// Host as given, possibly `user@host`.
    pub host: String,
    /// Directory on the host, `<remote_root>/<name_prefix><APP>`.
    pub path: String,
}

impl RemoteDestination {
    /// Derives the destination for `params` from the naming convention.
    #[must_use]
    pub fn new(config: &TasksConfig, params: &DeployParams) -> Self {
        let root = config.remote_root.trim_end_matches('/');
        Self {
            host: params.hostname().to_string(),
            path: format!("{root}/{}{}", config.name_prefix, params.app()),
        }
    }

    /// The rsync destination operand.
    ///
    /// The trailing slash makes rsync treat the path as a directory and put
    /// the binary inside it under its own name.
    #[must_use]
    pub fn rsync_target(&self) -> String {
        format!("{}:{}/", self.host, self.path)
    }
}

impl fmt::Display for RemoteDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.path)
    }
}

/// The transfer command for `artifact`.
#[must_use]
pub fn command(
    config: &TasksConfig,
    artifact: &Path,
    destination: &RemoteDestination,
) -> CommandLine {
    CommandLine::new(&config.rsync)
        .args(config.rsync_flags.iter().cloned())
        .arg(artifact.display().to_string())
        .arg(destination.rsync_target())
}

/// Transfers the built binary for `params.app()`.
///
/// Expects `build` to have run already; [`crate::tasks::run`] guarantees that.
///
/// # Errors
///
/// Returns an error if the artifact is missing, or the transfer tool cannot
/// be started or exits non-zero.
pub fn run(
    ctx: &ServiceContext,
    config: &TasksConfig,
    params: &DeployParams,
) -> Result<(), TaskError> {
    let artifact = build::artifact_path(config, params.app());
    let destination = RemoteDestination::new(config, params);

    if !ctx.fs.is_file(&artifact) {
        if !ctx.is_dry_run() {
            return Err(TaskError::MissingArtifact { path: artifact });
        }
        warn!(path = %artifact.display(), "dry run: artifact not built yet");
    }

    info!(artifact = %artifact.display(), %destination, "transferring");
    run_command(ctx, "deploy", &command(config, &artifact, &destination))
}
