//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

/// Replays recorded filesystem operations from a cassette.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a new replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn exists(&self, _path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let (_, output) = next_output(&self.replayer, "fs", "exists")?;
        replay_result(&output, "fs::exists")
    }

    fn remove_file(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (_, output) = next_output(&self.replayer, "fs", "remove_file")?;
        replay_result(&output, "fs::remove_file")
    }

    fn write_file(
        &self,
        _path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (_, output) = next_output(&self.replayer, "fs", "write_file")?;
        replay_result(&output, "fs::write_file")
    }
}
