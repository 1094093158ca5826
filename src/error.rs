//! Error types for task execution and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by port implementations.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a task or one of its prerequisites.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A subprocess ran but exited unsuccessfully.
    #[error("{task} failed: `{program}` exited with status {code}")]
    CommandFailed {
        /// Task that issued the command.
        task: &'static str,
        /// Program that was run.
        program: String,
        /// Exit code, or -1 when the process was killed by a signal.
        code: i32,
    },

    /// A subprocess could not be started.
    #[error("{task} failed: could not run `{program}`: {source}")]
    Spawn {
        /// Task that issued the command.
        task: &'static str,
        /// Program that was run.
        program: String,
        /// Underlying port error.
        #[source]
        source: PortError,
    },

    /// The binary to deploy is not where the build puts it.
    #[error("build artifact not found at {}", path.display())]
    MissingArtifact {
        /// Expected artifact path.
        path: PathBuf,
    },

    /// A task parameter was rejected before anything ran.
    #[error(transparent)]
    InvalidParam(#[from] ParamError),
}

/// A rejected `APP` or `HOSTNAME` value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The parameter was empty.
    #[error("{name} must not be empty")]
    Empty {
        /// Parameter name.
        name: &'static str,
    },

    /// The parameter contained a character outside its allowed set.
    #[error("{name} contains invalid character {found:?} in {value:?}")]
    InvalidChar {
        /// Parameter name.
        name: &'static str,
        /// The full rejected value.
        value: String,
        /// The offending character.
        found: char,
    },

    /// The parameter starts with a character that tools would misread.
    #[error("{name} must not start with {found:?}: {value:?}")]
    InvalidStart {
        /// Parameter name.
        name: &'static str,
        /// The full rejected value.
        value: String,
        /// The offending leading character.
        found: char,
    },
}

/// Failure to load configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the expected schema.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A `.env` file exists but could not be loaded.
    #[error("failed to load .env: {0}")]
    Dotenv(#[from] dotenvy::Error),
}
