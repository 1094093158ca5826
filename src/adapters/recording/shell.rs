//! Recording adapter for the `ShellExecutor` port.

use std::sync::{Arc, Mutex};

use super::with_recorder;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortError;
use crate::ports::{CommandLine, ShellExecutor, ShellOutput};

/// Records each command and its exit status while delegating to `inner`.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(&self, command: &CommandLine) -> Result<ShellOutput, PortError> {
        let result = self.inner.run(command);
        with_recorder(&self.recorder, |r| r.record_result("shell", "run", command, &result));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::dry_run::DryRunShellExecutor;
    use serde_json::json;

    #[test]
    fn records_command_and_exit_code() {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(
            std::env::temp_dir().join("chat_tasks_rec_shell.yaml"),
            "test",
            "abc",
        )));
        let shell =
            RecordingShellExecutor::new(Box::new(DryRunShellExecutor), Arc::clone(&recorder));

        let cmd = CommandLine::new("cargo").args(["build", "--release"]);
        assert!(shell.run(&cmd).unwrap().success());
        drop(shell);

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        let path = recorder.finish().unwrap();
        let cassette = crate::cassette::Cassette::load(&path).unwrap();
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.port, "shell");
        assert_eq!(interaction.input, json!({"program": "cargo", "args": ["build", "--release"]}));
        assert_eq!(interaction.output, json!({"ok": {"exit_code": 0}}));

        let _ = std::fs::remove_file(&path);
    }
}
