//! `chat-tasks deploy APP HOSTNAME` command.

use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::tasks::{self, DeployParams, Task};

/// Execute the `deploy` command: validate the parameters, build, transfer.
///
/// # Errors
///
/// Returns an error string if a parameter is invalid, the build fails, or
/// the transfer fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    config: &TasksConfig,
    app: &str,
    hostname: &str,
) -> Result<(), String> {
    let params = DeployParams::new(app, hostname).map_err(|e| e.to_string())?;
    tasks::run(ctx, config, &Task::Deploy(params)).map_err(|e| e.to_string())
}
