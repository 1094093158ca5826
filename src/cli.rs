//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI parser for `chat-tasks`.
#[derive(Debug, Parser)]
#[command(name = "chat-tasks", version, about = "Build, deploy and clean the chat binaries")]
pub struct Cli {
    /// Print the commands and deletions a task would perform without running them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Path to a YAML config file (defaults to `chat-tasks.yaml` when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (`-v` debug, `-vv` trace).
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The task to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported tasks.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile the application in release mode.
    Build,
    /// Build, then sync one binary to `HOSTNAME:~/projects/chat-APP`.
    Deploy {
        /// Application identifier; also the name of the binary to ship.
        #[arg(value_name = "APP")]
        app: String,
        /// Remote machine address, optionally `user@host`.
        #[arg(value_name = "HOSTNAME")]
        hostname: String,
    },
    /// Remove build outputs and clear the local log directory.
    Clean,
    /// List the available tasks and their prerequisites.
    List,
}
