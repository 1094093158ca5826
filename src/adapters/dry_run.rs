//! Dry-run adapters: read the real filesystem, perform nothing.

use std::path::Path;

use tracing::info;

use crate::adapters::live::LiveFileSystem;
use crate::error::PortError;
use crate::ports::filesystem::{DirEntry, FileSystem};
use crate::ports::shell::{CommandLine, ShellExecutor, ShellOutput};

/// Logs each command instead of running it and reports success.
pub struct DryRunShellExecutor;

impl ShellExecutor for DryRunShellExecutor {
    fn run(&self, command: &CommandLine) -> Result<ShellOutput, PortError> {
        info!(%command, "dry run: would execute");
        Ok(ShellOutput { exit_code: 0 })
    }
}

/// Answers queries from disk but only logs deletions.
pub struct DryRunFileSystem;

impl FileSystem for DryRunFileSystem {
    fn exists(&self, path: &Path) -> bool {
        LiveFileSystem.exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        LiveFileSystem.is_file(path)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PortError> {
        LiveFileSystem.list_dir(path)
    }

    fn remove_file(&self, path: &Path) -> Result<(), PortError> {
        info!(path = %path.display(), "dry run: would remove");
        Ok(())
    }
}
