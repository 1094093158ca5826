//! `clean`: remove build outputs and clear the log directory.

use std::path::Path;

use tracing::{debug, info, warn};

use super::run_command;
use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::error::TaskError;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::CommandLine;

/// What clearing the log directory did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Log files removed.
    pub removed: usize,
    /// Log files that could not be removed.
    pub failed: usize,
}

/// `cargo clean`.
#[must_use]
pub fn command(config: &TasksConfig) -> CommandLine {
    CommandLine::new(&config.cargo).arg("clean")
}

/// Removes build outputs, then clears the log directory.
///
/// # Errors
///
/// Returns an error if the toolchain fails.
pub fn run(ctx: &ServiceContext, config: &TasksConfig) -> Result<CleanReport, TaskError> {
    run_command(ctx, "clean", &command(config))?;
    let report = clear_logs(ctx.fs.as_ref(), &config.log_dir);
    info!(
        removed = report.removed,
        failed = report.failed,
        "cleared log directory"
    );
    Ok(report)
}

/// Removes the files directly inside `dir`, keeping the directory.
///
/// Subdirectories are left alone. A missing directory counts as already
/// clean. A directory that cannot be listed, and files that cannot be
/// removed, are logged and skipped.
#[must_use]
pub fn clear_logs(fs: &dyn FileSystem, dir: &Path) -> CleanReport {
    let mut report = CleanReport::default();
    if !fs.exists(dir) {
        debug!(dir = %dir.display(), "no log directory");
        return report;
    }

    let entries = match fs.list_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(dir = %dir.display(), error = %err, "could not list log directory");
            return report;
        }
    };

    for entry in entries.iter().filter(|e| !e.is_dir) {
        let path = dir.join(&entry.name);
        match fs.remove_file(&path) {
            Ok(()) => report.removed += 1,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not remove log file");
                report.failed += 1;
            }
        }
    }
    report
}
