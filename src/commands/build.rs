//! `chat-tasks build` command.

use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::tasks::{self, Task};

/// Execute the `build` command.
///
/// # Errors
///
/// Returns an error string if the release build fails.
pub fn run_with_context(ctx: &ServiceContext, config: &TasksConfig) -> Result<(), String> {
    tasks::run(ctx, config, &Task::Build).map_err(|e| e.to_string())
}
