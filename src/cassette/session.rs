//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use crate::error::Error;

/// Owns one recorder per port for a single recorded run.
///
/// Cassettes land in `<base>/<timestamp>/<port>.cassette.yaml`.
pub struct RecordingSession {
    /// Recorder for shell interactions.
    pub shell: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates a session writing into a fresh timestamped directory under `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamped directory already exists or
    /// cannot be created.
    pub fn new_in(base: &Path) -> Result<Self, Error> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(Error::Cassette(format!(
                "Cassette directory already exists: {}",
                output_dir.display()
            )));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| Error::Cassette(format!("Failed to create cassette directory: {e}")))?;

        let commit = commit_hash();
        let make_recorder = |port: &str| {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(path, name, &commit)))
        };

        Ok(Self {
            shell: make_recorder("shell"),
            fs: make_recorder("fs"),
            output_dir,
        })
    }

    /// Writes every port's cassette and returns the output directory.
    ///
    /// Adapters holding the recorders must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if a recorder is still shared or a file cannot be written.
    pub fn finish(self) -> Result<PathBuf, Error> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), Error> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| {
                    Error::Cassette(format!("Recording adapter for {port} still has references"))
                })?
                .into_inner()
                .map_err(|e| Error::Cassette(format!("Recorder lock for {port} poisoned: {e}")))?;
            recorder
                .finish()
                .map_err(|e| Error::Cassette(format!("Failed to write {port} cassette: {e}")))?;
            Ok(())
        }

        finish_one(self.shell, "shell")?;
        finish_one(self.fs, "fs")?;
        Ok(self.output_dir)
    }
}

/// Current git commit, or `unknown` outside a repository.
fn commit_hash() -> String {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| {
            log::warn!("could not read git commit hash, recording as 'unknown'");
            "unknown".to_string()
        })
}
