//! Recording adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::FileSystem;

/// Records filesystem interactions while delegating to an inner implementation.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a new recording filesystem wrapping the given implementation.
    pub fn new(inner: Box<dyn FileSystem>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct PathInput<'a> {
    path: &'a str,
}

#[derive(Serialize)]
struct WriteInput<'a> {
    path: &'a str,
    contents: &'a str,
}

impl FileSystem for RecordingFileSystem {
    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.exists(path);
        let input = PathInput {
            path: &path.display().to_string(),
        };
        record_result(&self.recorder, "fs", "exists", &input, &result);
        result
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.remove_file(path);
        let input = PathInput {
            path: &path.display().to_string(),
        };
        record_result(&self.recorder, "fs", "remove_file", &input, &result);
        result
    }

    fn write_file(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.write_file(path, contents);
        let input = WriteInput {
            path: &path.display().to_string(),
            contents,
        };
        record_result(&self.recorder, "fs", "write_file", &input, &result);
        result
    }
}
