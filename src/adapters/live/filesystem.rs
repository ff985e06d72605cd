//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        Ok(path.exists())
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::remove_file(path)?)
    }

    fn write_file(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::write(path, contents)?)
    }
}
