//! Replaying adapters that answer port calls from a cassette.

pub mod filesystem;
pub mod shell;

pub use filesystem::ReplayingFileSystem;
pub use shell::ReplayingShellExecutor;

use std::sync::{Arc, Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;

/// Replayer shared by the adapters of one context.
pub type SharedReplayer = Arc<Mutex<CassetteReplayer>>;

/// Takes the recorded output for a call with the given input.
fn next_output<I: Serialize>(
    replayer: &SharedReplayer,
    port: &str,
    method: &str,
    input: &I,
) -> Result<Value, String> {
    let input = serde_json::to_value(input).map_err(|e| format!("{port}::{method}: {e}"))?;
    let mut guard = replayer.lock().unwrap_or_else(PoisonError::into_inner);
    guard.next_output(port, method, &input)
}

/// Replays a fallible call recorded as `{"ok": ..}` or `{"err": ..}`.
fn replay_result<I, T>(
    replayer: &SharedReplayer,
    port: &str,
    method: &str,
    input: &I,
) -> Result<T, PortError>
where
    I: Serialize,
    T: DeserializeOwned,
{
    let output = next_output(replayer, port, method, input)?;
    if let Some(err) = output.get("err") {
        return Err(err.as_str().unwrap_or("unknown error").into());
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| format!("{port}::{method}: failed to deserialize: {e}").into())
}

/// Replays an infallible call.
///
/// # Panics
///
/// Panics when the cassette cannot answer, since the port offers no error
/// channel for the caller.
fn replay_value<I, T>(replayer: &SharedReplayer, port: &str, method: &str, input: &I) -> T
where
    I: Serialize,
    T: DeserializeOwned,
{
    let output = next_output(replayer, port, method, input).unwrap_or_else(|e| panic!("{e}"));
    serde_json::from_value(output)
        .unwrap_or_else(|e| panic!("{port}::{method}: failed to deserialize: {e}"))
}
