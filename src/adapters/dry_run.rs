//! Dry-run adapters: announce the action, report success, change nothing.

use std::path::{Path, PathBuf};

use crate::ports::{CommandSpec, FileSystem, ShellExecutor, ShellOutput};

/// Prints each command instead of running it.
///
/// Tool lookups still consult the real search path so `doctor` stays useful.
pub struct DryRunShellExecutor {
    lookup: Box<dyn ShellExecutor>,
}

impl DryRunShellExecutor {
    /// Creates a dry-run executor that delegates `locate` to `lookup`.
    pub fn new(lookup: Box<dyn ShellExecutor>) -> Self {
        Self { lookup }
    }
}

impl ShellExecutor for DryRunShellExecutor {
    fn run(
        &self,
        command: &CommandSpec,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        println!("Would run: {command}");
        Ok(ShellOutput { exit_code: 0 })
    }

    fn locate(
        &self,
        program: &str,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        self.lookup.locate(program)
    }
}

/// Reports real file existence but never deletes anything.
pub struct DryRunFileSystem {
    inner: Box<dyn FileSystem>,
}

impl DryRunFileSystem {
    /// Creates a dry-run filesystem reading through `inner`.
    pub fn new(inner: Box<dyn FileSystem>) -> Self {
        Self { inner }
    }
}

impl FileSystem for DryRunFileSystem {
    fn exists(&self, path: &Path) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        self.inner.exists(path)
    }

    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("Would remove: {}", path.display());
        Ok(())
    }

    fn write_file(
        &self,
        path: &Path,
        _contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        println!("Would write: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::{LiveFileSystem, LiveShellExecutor};

    #[test]
    fn dry_run_never_fails_a_command() {
        let shell = DryRunShellExecutor::new(Box::new(LiveShellExecutor));
        let result = shell
            .run(&CommandSpec::new("litebuild-no-such-program", ["--flag"]))
            .unwrap();
        assert!(result.success());
    }

    #[test]
    fn dry_run_keeps_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("program");
        std::fs::write(&path, "binary").unwrap();

        let fs = DryRunFileSystem::new(Box::new(LiveFileSystem));
        fs.remove_file(&path).unwrap();
        assert!(fs.exists(&path).unwrap());

        let config = dir.path().join("litebuild.yml");
        fs.write_file(&config, "compiler: clang\n").unwrap();
        assert!(!config.exists());
    }
}
