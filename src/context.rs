//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::dry_run::{DryRunFileSystem, DryRunShellExecutor};
use crate::adapters::live::{LiveFileSystem, LiveShellExecutor};
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::error::Error;
use crate::ports::filesystem::FileSystem;
use crate::ports::shell::ShellExecutor;

/// Bundles the port trait objects a command needs.
///
/// Constructors wire up different adapter implementations (live, dry-run,
/// recording, replaying); commands only ever see the traits.
pub struct ServiceContext {
    /// Executor for external commands.
    pub shell: Box<dyn ShellExecutor>,
    /// Filesystem for build artifacts.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context that runs commands and touches files for real.
    #[must_use]
    pub fn live() -> Self {
        Self {
            shell: Box::new(LiveShellExecutor),
            fs: Box::new(LiveFileSystem),
        }
    }

    /// Creates a context that prints commands and removals without doing them.
    #[must_use]
    pub fn dry_run() -> Self {
        Self {
            shell: Box::new(DryRunShellExecutor::new(Box::new(LiveShellExecutor))),
            fs: Box::new(DryRunFileSystem::new(Box::new(LiveFileSystem))),
        }
    }

    /// Creates a live context whose interactions are recorded under `base`.
    ///
    /// The returned session must be finished after this context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(base: &Path) -> Result<(Self, RecordingSession), Error> {
        let session = RecordingSession::new_in(base)?;
        let ctx = Self {
            shell: Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                std::sync::Arc::clone(&session.shell),
            )),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                std::sync::Arc::clone(&session.fs),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a context answered entirely from a monolithic cassette file.
    ///
    /// Each port gets its own replayer over the same cassette so per-port
    /// streams stay independent.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, Error> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
        })
    }
}
