//! Adapters implementing the port traits.
//!
//! `live` touches the real system, `dry_run` only logs side effects,
//! `recording` wraps another adapter and writes a cassette, and `replaying`
//! answers from a cassette.

pub mod dry_run;
pub mod live;
pub mod recording;
pub mod replaying;

use std::path::Path;

use serde::Serialize;

/// Cassette input for filesystem calls.
#[derive(Serialize)]
pub(crate) struct PathInput {
    path: String,
}

impl PathInput {
    pub(crate) fn new(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
        }
    }
}
