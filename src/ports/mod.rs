//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the task logic and an external
//! system (subprocesses, the local filesystem). Implementations live in
//! `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::{DirEntry, FileSystem};
pub use shell::{CommandLine, ShellExecutor, ShellOutput};
