//! Filesystem port for the operations tasks perform on local files.

use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::PortError;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// File name without the parent path.
    ///
    /// Names need not be UTF-8. Cassettes store the lossy display form.
    #[serde(with = "lossy_name")]
    pub name: OsString,
    /// Whether the entry is a directory (symlinks are not followed).
    pub is_dir: bool,
}

/// Provides the filesystem queries and deletions used by tasks.
///
/// Abstracting the filesystem allows dry runs and replay without touching
/// the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Lists the entries of a directory, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a directory or cannot be read.
    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PortError>;

    /// Removes a single non-directory entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), PortError>;
}

mod lossy_name {
    use std::ffi::{OsStr, OsString};

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(name: &OsStr, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&name.to_string_lossy())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OsString, D::Error> {
        String::deserialize(deserializer).map(OsString::from)
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>, PortError> {
        (**self).list_dir(path)
    }

    fn remove_file(&self, path: &Path) -> Result<(), PortError> {
        (**self).remove_file(path)
    }
}
