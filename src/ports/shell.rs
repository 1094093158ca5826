//! Shell executor port for running external commands.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// A program invocation: the executable and its argument vector.
///
/// Commands are never passed through `sh -c`, so parameter values cannot be
/// reinterpreted by a local shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    /// Program name or path.
    pub program: String,
    /// Arguments, in order.
    pub args: Vec<String>,
}

impl CommandLine {
    /// Starts a command line for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {arg:?}")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// The outcome of a command execution.
///
/// Output streams are inherited by the child process, so only the exit code
/// is reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process, or -1 if it was killed by a signal.
    pub exit_code: i32,
}

impl ShellOutput {
    /// Returns `true` for a zero exit code.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes external commands.
///
/// Abstracting execution allows dry runs and deterministic replay of
/// recorded sessions.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command to completion and returns its exit status.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned.
    fn run(&self, command: &CommandLine) -> Result<ShellOutput, PortError>;
}

impl<T: ShellExecutor + ?Sized> ShellExecutor for Arc<T> {
    fn run(&self, command: &CommandLine) -> Result<ShellOutput, PortError> {
        (**self).run(command)
    }
}
