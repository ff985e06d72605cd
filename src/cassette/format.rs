//! Cassette data structures for recording and replaying interactions.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (`shell` or `fs`).
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Git commit hash at recording time.
    pub commit: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a cassette from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cassette`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Cassette(format!("Failed to read cassette file {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content).map_err(|e| {
            Error::Cassette(format!("Failed to parse cassette file {}: {e}", path.display()))
        })
    }
}
