//! Filesystem port for the few file operations the CLI performs itself.

use std::path::Path;

/// Provides access to build artifacts on disk.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Returns `true` if the path exists on the filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be produced, as when a replayed
    /// cassette has no more `exists` calls.
    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Creates or truncates `path` and writes `contents` to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write_file(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
