//! Recording adapters that capture interactions to cassettes.

pub mod filesystem;
pub mod shell;

pub use filesystem::RecordingFileSystem;
pub use shell::RecordingShellExecutor;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Appends a `Result` interaction as `{"Ok": value}` or `{"Err": message}`.
///
/// The replaying side reads the same shape back.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input = serde_json::to_value(input).expect("cassette input must serialize");
    let output = match result {
        Ok(value) => {
            let value = serde_json::to_value(value).expect("cassette output must serialize");
            serde_json::json!({ "Ok": value })
        }
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };
    recorder.lock().expect("recorder lock poisoned").record(port, method, input, output);
}
