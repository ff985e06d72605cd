//! Replaying adapters that answer from recorded interactions.

pub mod filesystem;
pub mod shell;

pub use filesystem::ReplayingFileSystem;
pub use shell::ReplayingShellExecutor;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

/// Pops the next recorded input and output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> Result<(serde_json::Value, serde_json::Value), String> {
    let interaction = replayer
        .lock()
        .expect("replayer lock poisoned")
        .next_interaction(port, method)?;
    Ok((interaction.input, interaction.output))
}

/// Reads a recorded `Result` back.
///
/// Accepts `{"Ok": v}` / `{"Err": msg}` as written by the recorder, and the
/// lowercase `ok` / `err` keys of hand-written cassettes.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: &serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("Err").or_else(|| output.get("err")) {
        return Err(err.as_str().unwrap_or("unknown error").to_string().into());
    }
    let value = output.get("Ok").or_else(|| output.get("ok")).unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize recorded output: {e}").into())
}
