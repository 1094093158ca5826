//! `chat-tasks clean` command.

use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::tasks::{self, Task};

/// Execute the `clean` command.
///
/// # Errors
///
/// Returns an error string if `cargo clean` fails or the log directory
/// cannot be read.
pub fn run_with_context(ctx: &ServiceContext, config: &TasksConfig) -> Result<(), String> {
    tasks::run(ctx, config, &Task::Clean).map_err(|e| e.to_string())
}
