//! Command dispatch and handlers.

pub mod build;
pub mod clean;
pub mod deploy;
pub mod list;

use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::logging;

/// Environment variable naming a cassette to record the session into.
pub const RECORD_ENV: &str = "CHAT_TASKS_RECORD";
/// Environment variable naming a cassette to replay instead of running anything.
pub const REPLAY_ENV: &str = "CHAT_TASKS_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// Loads configuration, installs logging and picks the adapter set:
/// replaying when `CHAT_TASKS_REPLAY` is set, recording when
/// `CHAT_TASKS_RECORD` is set, dry-run with `--dry-run`, live otherwise.
///
/// # Errors
///
/// Returns an error string if configuration fails or the task fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = TasksConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    logging::init(&logging::default_directive(cli.verbose, cli.quiet, &config.log_level));

    if matches!(cli.command, Command::List) {
        return list::run();
    }

    let (ctx, session) = select_context(cli.dry_run)?;
    let result = dispatch_with_context(&cli.command, &ctx, &config);

    if let Some(unreplayed) = ctx.unreplayed().filter(|n| *n > 0) {
        warn!(unreplayed, "cassette has interactions that were not replayed");
    }

    // Finish recording after the task completes, even on error.
    if let Some(session) = session {
        // Release the adapters' references to the recorder first.
        drop(ctx);
        return finish_recording(session, result);
    }

    result
}

fn select_context(dry_run: bool) -> Result<(ServiceContext, Option<RecordingSession>), String> {
    if let Ok(path) = env::var(REPLAY_ENV) {
        return Ok((ServiceContext::replaying(&PathBuf::from(path))?, None));
    }
    if let Ok(path) = env::var(RECORD_ENV) {
        if dry_run {
            return Err(format!("--dry-run cannot be combined with {RECORD_ENV}"));
        }
        let (ctx, session) = ServiceContext::recording(&PathBuf::from(path));
        return Ok((ctx, Some(session)));
    }
    if dry_run {
        return Ok((ServiceContext::dry_run(), None));
    }
    Ok((ServiceContext::live(), None))
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &TasksConfig,
) -> Result<(), String> {
    match command {
        Command::Build => build::run_with_context(ctx, config),
        Command::Deploy { app, hostname } => deploy::run_with_context(ctx, config, app, hostname),
        Command::Clean => clean::run_with_context(ctx, config),
        Command::List => list::run(),
    }
}

/// Writes the cassette. The task's own error wins over a failed write.
fn finish_recording(session: RecordingSession, result: Result<(), String>) -> Result<(), String> {
    match session.finish() {
        Ok(path) => {
            info!(path = %path.display(), "recording saved");
            result
        }
        Err(err) => {
            warn!(error = %err, "could not save recording");
            result.and(Err(err))
        }
    }
}
