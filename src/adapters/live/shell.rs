//! Live shell executor using `std::process::Command`.

use std::process::Command;

use tracing::debug;

use crate::error::PortError;
use crate::ports::shell::{CommandLine, ShellExecutor, ShellOutput};

/// Live executor that spawns the program directly and waits for it.
///
/// Standard streams are inherited, so progress and diagnostics from cargo
/// and rsync reach the terminal unmodified.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &CommandLine) -> Result<ShellOutput, PortError> {
        debug!(%command, "spawning");
        let status = Command::new(&command.program).args(&command.args).status()?;
        Ok(ShellOutput {
            exit_code: status.code().unwrap_or(-1),
        })
    }
}
