//! In-memory cassette recorder flushed to YAML when finished.

use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Collects interactions in memory and writes them as one YAML cassette.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    commit: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to `path` when finished.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            commit: commit.into(),
            interactions: Vec::new(),
        }
    }

    /// Appends an interaction, numbered after those already recorded.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Writes the cassette to disk, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn finish(self) -> Result<PathBuf, std::io::Error> {
        log::debug!("writing {} interactions to {}", self.interactions.len(), self.path.display());
        let cassette = Cassette {
            name: self.name,
            recorded_at: Utc::now(),
            commit: self.commit,
            interactions: self.interactions,
        };
        let yaml = serde_yaml::to_string(&cassette).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}
