//! Replaying adapter for the `FileSystem` port.

use std::path::Path;

use super::{replay_result, replay_value, SharedReplayer};
use crate::adapters::PathInput;
use crate::error::PortError;
use crate::ports::filesystem::{DirEntry, FileSystem};

/// Answers filesystem calls from a cassette without touching the disk.
pub struct ReplayingFileSystem {
    replayer: SharedReplayer,
}

impl ReplayingFileSystem {
    /// Creates a filesystem reading from `replayer`.
    #[must_use]
    pub fn new(replayer: SharedReplayer) -> Self {
        Self { replayer }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn exists(&self, path: &Path) -> bool {
        replay_value(&self.replayer, "fs", "exists", &PathInput::new(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        replay_value(&self.replayer, "fs", "is_file", &PathInput::new(path))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PortError> {
        replay_result(&self.replayer, "fs", "list_dir", &PathInput::new(path))
    }

    fn remove_file(&self, path: &Path) -> Result<(), PortError> {
        replay_result(&self.replayer, "fs", "remove_file", &PathInput::new(path))
    }
}
