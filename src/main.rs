//! Binary entrypoint for the `chat-tasks` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Recording and replay are selected in commands::dispatch via
    // CHAT_TASKS_RECORD=<file> and CHAT_TASKS_REPLAY=<file>.
    match chat_tasks::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
