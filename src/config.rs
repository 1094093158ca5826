//! Task configuration: built-in defaults, an optional YAML file, then
//! `CHAT_TASKS_*` environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "chat-tasks.yaml";

/// Settings for the toolchain, the transfer tool and local paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TasksConfig {
    /// Toolchain program used for `build` and `clean`.
    pub cargo: String,
    /// Extra arguments appended to `cargo build --release`.
    pub build_args: Vec<String>,
    /// Directory where release binaries land.
    pub target_dir: PathBuf,
    /// Directory whose files `clean` removes.
    pub log_dir: PathBuf,
    /// File-synchronization program used by `deploy`.
    pub rsync: String,
    /// Flags passed to the synchronization program before the paths.
    pub rsync_flags: Vec<String>,
    /// Remote directory holding the deployed applications.
    pub remote_root: String,
    /// Prefix of each application's remote directory name.
    pub name_prefix: String,
    /// Default log filter when neither `RUST_LOG` nor `-v`/`--quiet` is given.
    pub log_level: String,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            cargo: "cargo".to_string(),
            build_args: Vec::new(),
            target_dir: PathBuf::from("target/release"),
            log_dir: PathBuf::from("logs"),
            rsync: "rsync".to_string(),
            // progress+partial, archive, verbose, compress, itemized
            rsync_flags: ["-P", "-a", "-v", "-z", "-v"].map(String::from).to_vec(),
            remote_root: "~/projects".to_string(),
            name_prefix: "chat-".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TasksConfig {
    /// Loads configuration for a CLI invocation.
    ///
    /// A `.env` file in the working directory is loaded into the process
    /// environment first. An explicit `path` must exist; the implicit
    /// `chat-tasks.yaml` is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if `.env` or the config file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(env_path) => debug!(path = %env_path.display(), "loaded .env"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parses a YAML config file; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        };
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Overrides fields from `CHAT_TASKS_*` variables returned by `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(v) = var("CHAT_TASKS_CARGO") {
            self.cargo = v;
        }
        if let Some(v) = var("CHAT_TASKS_RSYNC") {
            self.rsync = v;
        }
        if let Some(v) = var("CHAT_TASKS_TARGET_DIR") {
            self.target_dir = PathBuf::from(v);
        }
        if let Some(v) = var("CHAT_TASKS_LOG_DIR") {
            self.log_dir = PathBuf::from(v);
        }
        if let Some(v) = var("CHAT_TASKS_REMOTE_ROOT") {
            self.remote_root = v;
        }
        if let Some(v) = var("CHAT_TASKS_NAME_PREFIX") {
            self.name_prefix = v;
        }
    }
}
