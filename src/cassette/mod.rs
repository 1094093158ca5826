//! Cassettes: recorded port interactions for replaying task sessions.
//!
//! A session run with `CHAT_TASKS_RECORD=<file>` writes every shell and
//! filesystem interaction to a YAML cassette. Replaying that cassette drives
//! the same tasks without cargo, rsync or a remote host.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

pub use format::{Cassette, Interaction};
pub use recorder::CassetteRecorder;
pub use replayer::CassetteReplayer;
pub use session::RecordingSession;
