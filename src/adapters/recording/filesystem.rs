//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use super::with_recorder;
use crate::adapters::PathInput;
use crate::cassette::recorder::CassetteRecorder;
use crate::error::PortError;
use crate::ports::{DirEntry, FileSystem};

/// Records filesystem calls while delegating to `inner`.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl FileSystem for RecordingFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let result = self.inner.exists(path);
        with_recorder(&self.recorder, |r| {
            r.record_value("fs", "exists", &PathInput::new(path), &result);
        });
        result
    }

    fn is_file(&self, path: &Path) -> bool {
        let result = self.inner.is_file(path);
        with_recorder(&self.recorder, |r| {
            r.record_value("fs", "is_file", &PathInput::new(path), &result);
        });
        result
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PortError> {
        let result = self.inner.list_dir(path);
        with_recorder(&self.recorder, |r| {
            r.record_result("fs", "list_dir", &PathInput::new(path), &result);
        });
        result
    }

    fn remove_file(&self, path: &Path) -> Result<(), PortError> {
        let result = self.inner.remove_file(path);
        with_recorder(&self.recorder, |r| {
            r.record_result("fs", "remove_file", &PathInput::new(path), &result);
        });
        result
    }
}
