//! Recording adapters that capture interactions into a cassette.

pub mod filesystem;
pub mod shell;

pub use filesystem::RecordingFileSystem;
pub use shell::RecordingShellExecutor;

use std::sync::{Arc, Mutex, PoisonError};

use crate::cassette::recorder::CassetteRecorder;

/// Runs `f` with the shared recorder locked.
///
/// A poisoned lock still holds every interaction recorded before the
/// panic, so recording carries on with it.
fn with_recorder(recorder: &Arc<Mutex<CassetteRecorder>>, f: impl FnOnce(&mut CassetteRecorder)) {
    let mut guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard);
}
