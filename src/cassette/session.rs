//! Recording session shared by the recording adapters.

use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::warn;

use super::recorder::CassetteRecorder;

/// Owns the recorder that the recording adapters write into.
///
/// Adapters hold clones of [`RecordingSession::recorder`]; they must be
/// dropped before [`RecordingSession::finish`] can write the file.
pub struct RecordingSession {
    /// Shared recorder for every port.
    pub recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Starts a session that will write its cassette to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let name = format!("chat-tasks-{}", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(path, name, current_commit());
        Self {
            recorder: Arc::new(Mutex::new(recorder)),
        }
    }

    /// Writes the cassette and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

/// Current git commit, or "unknown" outside a repository.
fn current_commit() -> String {
    let hash = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string());

    hash.unwrap_or_else(|| {
        warn!("could not determine git commit for cassette, using 'unknown'");
        "unknown".to_string()
    })
}
