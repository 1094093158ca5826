//! The build, deploy and clean tasks and the runner that orders them.
//!
//! A task may declare prerequisites. [`run`] executes them first, in the
//! same invocation, and stops at the first failure so a dependent step never
//! starts after a failed prerequisite.

pub mod build;
pub mod clean;
pub mod deploy;
pub mod params;

pub use params::DeployParams;

use std::time::Instant;

use tracing::{debug, info};

use crate::config::TasksConfig;
use crate::context::ServiceContext;
use crate::error::TaskError;
use crate::ports::shell::CommandLine;

/// A runnable task with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Release build of the workspace.
    Build,
    /// Transfer of one built binary to a remote host.
    Deploy(DeployParams),
    /// Removal of build outputs and log files.
    Clean,
}

impl Task {
    /// The task's CLI name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Task::Build => "build",
            Task::Deploy(_) => "deploy",
            Task::Clean => "clean",
        }
    }

    /// Tasks that must succeed before this one starts.
    #[must_use]
    pub fn prerequisites(&self) -> Vec<Task> {
        match self {
            Task::Deploy(_) => vec![Task::Build],
            Task::Build | Task::Clean => Vec::new(),
        }
    }
}

/// Static description of a task, for listings.
#[derive(Debug, Clone, Copy)]
pub struct TaskInfo {
    /// CLI name.
    pub name: &'static str,
    /// Positional parameter names.
    pub params: &'static [&'static str],
    /// One-line description.
    pub about: &'static str,
    /// Names of prerequisite tasks.
    pub requires: &'static [&'static str],
}

/// Every task the CLI offers, in listing order.
pub const CATALOG: [TaskInfo; 3] = [
    TaskInfo {
        name: "build",
        params: &[],
        about: "Compile the application in release mode",
        requires: &[],
    },
    TaskInfo {
        name: "deploy",
        params: &["APP", "HOSTNAME"],
        about: "Sync target/release/APP to HOSTNAME:~/projects/chat-APP",
        requires: &["build"],
    },
    TaskInfo {
        name: "clean",
        params: &[],
        about: "Remove build outputs and the files under logs/",
        requires: &[],
    },
];

/// Orders `task` after its prerequisites, each step appearing once.
#[must_use]
pub fn plan(task: &Task) -> Vec<Task> {
    let mut steps = Vec::new();
    push_with_prerequisites(task, &mut steps);
    steps
}

fn push_with_prerequisites(task: &Task, steps: &mut Vec<Task>) {
    for prerequisite in task.prerequisites() {
        push_with_prerequisites(&prerequisite, steps);
    }
    if !steps.contains(task) {
        steps.push(task.clone());
    }
}

/// Runs `task` and its prerequisites in order.
///
/// # Errors
///
/// Returns the first step's error; later steps are not started.
pub fn run(ctx: &ServiceContext, config: &TasksConfig, task: &Task) -> Result<(), TaskError> {
    for step in plan(task) {
        let started = Instant::now();
        info!(task = step.name(), "starting");
        execute(ctx, config, &step)?;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(task = step.name(), elapsed_ms, "finished");
    }
    Ok(())
}

fn execute(ctx: &ServiceContext, config: &TasksConfig, task: &Task) -> Result<(), TaskError> {
    match task {
        Task::Build => build::run(ctx, config),
        Task::Deploy(params) => deploy::run(ctx, config, params),
        Task::Clean => clean::run(ctx, config).map(|_| ()),
    }
}

/// Runs one command for `task`, turning a non-zero exit into an error.
pub(crate) fn run_command(
    ctx: &ServiceContext,
    task: &'static str,
    command: &CommandLine,
) -> Result<(), TaskError> {
    debug!(task, %command, "running command");
    let output = ctx.shell.run(command).map_err(|source| TaskError::Spawn {
        task,
        program: command.program.clone(),
        source,
    })?;
    if output.success() {
        Ok(())
    } else {
        Err(TaskError::CommandFailed {
            task,
            program: command.program.clone(),
            code: output.exit_code,
        })
    }
}
