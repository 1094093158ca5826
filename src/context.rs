//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::dry_run::{DryRunFileSystem, DryRunShellExecutor};
use crate::adapters::live::{LiveFileSystem, LiveShellExecutor};
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor, SharedReplayer};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::ShellExecutor;

/// Bundles the ports a task needs.
///
/// Constructors wire up different adapter sets (live, dry-run, recording,
/// replaying).
pub struct ServiceContext {
    /// Filesystem for artifact checks and log clearing.
    pub fs: Box<dyn FileSystem>,
    /// Executor for cargo and rsync.
    pub shell: Box<dyn ShellExecutor>,
    dry_run: bool,
    replayer: Option<SharedReplayer>,
}

impl ServiceContext {
    /// Creates a context from arbitrary adapters.
    #[must_use]
    pub fn new(shell: Box<dyn ShellExecutor>, fs: Box<dyn FileSystem>) -> Self {
        Self {
            fs,
            shell,
            dry_run: false,
            replayer: None,
        }
    }

    /// Creates a live context that runs commands and deletes files.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveShellExecutor), Box::new(LiveFileSystem))
    }

    /// Creates a context that reads the disk but only logs side effects.
    #[must_use]
    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::new(Box::new(DryRunShellExecutor), Box::new(DryRunFileSystem))
        }
    }

    /// Creates a live context whose interactions are recorded to `path`.
    ///
    /// The returned session must be finished after the context is dropped.
    #[must_use]
    pub fn recording(path: &Path) -> (Self, RecordingSession) {
        let session = RecordingSession::new(path);
        let ctx = Self::new(
            Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                Arc::clone(&session.recorder),
            )),
            Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.recorder),
            )),
        );
        (ctx, session)
    }

    /// Creates a context that answers every port call from a cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        let replayer: SharedReplayer = Arc::new(Mutex::new(CassetteReplayer::new(&cassette)));
        Ok(Self {
            replayer: Some(Arc::clone(&replayer)),
            ..Self::new(
                Box::new(ReplayingShellExecutor::new(Arc::clone(&replayer))),
                Box::new(ReplayingFileSystem::new(replayer)),
            )
        })
    }

    /// Returns `true` when side effects are only logged.
    #[must_use]
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Number of cassette interactions not yet replayed, for replaying contexts.
    #[must_use]
    pub fn unreplayed(&self) -> Option<usize> {
        self.replayer
            .as_ref()
            .map(|r| r.lock().unwrap_or_else(PoisonError::into_inner).remaining())
    }
}
