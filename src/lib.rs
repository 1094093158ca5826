//! Core library entry for the `chat-tasks` CLI.
//!
//! Three tasks automate the chat application binaries: `build` compiles them
//! in release mode, `deploy` builds and then ships one binary to a remote
//! host, and `clean` removes build outputs and local log files.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod tasks;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or a task fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are not failures.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_lists_tasks() {
        let result = run(["chat-tasks", "list"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["chat-tasks", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_when_deploy_misses_hostname() {
        let err = run(["chat-tasks", "deploy", "server"]).unwrap_err();
        assert!(err.contains("HOSTNAME"));
    }

    #[test]
    fn help_is_not_an_error() {
        assert!(run(["chat-tasks", "--help"]).is_ok());
    }
}
