//! Replaying adapter for the `ShellExecutor` port.

use super::{replay_result, SharedReplayer};
use crate::error::PortError;
use crate::ports::shell::{CommandLine, ShellExecutor, ShellOutput};

/// Answers command executions from recorded exit statuses.
pub struct ReplayingShellExecutor {
    replayer: SharedReplayer,
}

impl ReplayingShellExecutor {
    /// Creates an executor reading from `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, command: &CommandLine) -> Result<ShellOutput, PortError> {
        replay_result(&self.replayer, "shell", "run", command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn shell_with(interactions: Vec<Interaction>) -> ReplayingShellExecutor {
        let cassette =
            Cassette {
                name: "test".into(),
                recorded_at: Utc::now(),
                commit: "abc".into(),
                interactions,
            };
        ReplayingShellExecutor::new(Arc::new(Mutex::new(CassetteReplayer::new(&cassette))))
    }

    #[test]
    fn replays_exit_code() {
        let shell = shell_with(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"program": "cargo", "args": ["clean"]}),
            output: json!({"ok": {"exit_code": 101}}),
        }]);
        let result = shell.run(&CommandLine::new("cargo").arg("clean")).unwrap();
        assert_eq!(result.exit_code, 101);
    }

    #[test]
    fn replays_spawn_error() {
        let shell = shell_with(vec![Interaction {
            seq: 0,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"program": "rsync", "args": []}),
            output: json!({"err": "No such file or directory (os error 2)"}),
        }]);
        let err = shell.run(&CommandLine::new("rsync")).unwrap_err();
        assert!(err.to_string().contains("os error 2"));
    }

    #[test]
    fn unrecorded_command_is_an_error() {
        let shell = shell_with(vec![]);
        assert!(shell.run(&CommandLine::new("cargo")).is_err());
    }
}
