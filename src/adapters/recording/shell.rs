//! Recording adapter for the `ShellExecutor` port.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{CommandSpec, ShellExecutor, ShellOutput};

/// Records command executions while delegating to an inner executor.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Creates a new recording shell executor wrapping the given implementation.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct LocateInput<'a> {
    program: &'a str,
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(
        &self,
        command: &CommandSpec,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.run(command);
        record_result(&self.recorder, "shell", "run", command, &result);
        result
    }

    fn locate(
        &self,
        program: &str,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let found = self.inner.locate(program);
        record_result(&self.recorder, "shell", "locate", &LocateInput { program }, &found);
        found
    }
}
