//! Accumulates interactions and writes them out as a cassette.

use std::fmt::Display;
use std::path::PathBuf;

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use super::format::{Cassette, Interaction};

/// Collects interactions for one session.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    cassette: Cassette,
}

impl CassetteRecorder {
    /// Creates an empty recorder that will write to `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            cassette: Cassette {
                name: name.into(),
                recorded_at: Utc::now(),
                commit: commit.into(),
                interactions: Vec::new(),
            },
        }
    }

    /// Number of interactions recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cassette.interactions.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cassette.interactions.is_empty()
    }

    /// Appends an interaction with the next sequence number.
    pub fn record(&mut self, port: &str, method: &str, input: Value, output: Value) {
        let seq = self.cassette.interactions.len() as u64;
        self.cassette.interactions.push(Interaction {
            seq,
            port: port.to_string(),
            method: method.to_string(),
            input,
            output,
        });
    }

    /// Records an infallible call.
    pub fn record_value<I: Serialize, O: Serialize>(
        &mut self,
        port: &str,
        method: &str,
        input: &I,
        output: &O,
    ) {
        self.record(port, method, to_value(input), to_value(output));
    }

    /// Records a fallible call as `{"ok": value}` or `{"err": message}`.
    pub fn record_result<I, T, E>(
        &mut self,
        port: &str,
        method: &str,
        input: &I,
        result: &Result<T, E>,
    ) where
        I: Serialize,
        T: Serialize,
        E: Display,
    {
        let output = match result {
            Ok(value) => json!({ "ok": to_value(value) }),
            Err(e) => json!({ "err": e.to_string() }),
        };
        self.record(port, method, to_value(input), output);
    }

    /// Writes the cassette to disk and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        self.cassette.save(&self.path)?;
        Ok(self.path)
    }
}

// Port inputs and outputs are plain structs and strings.
fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}
