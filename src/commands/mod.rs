//! Command dispatch and handlers.

pub mod build;
pub mod clean;
pub mod doctor;
pub mod init;
pub mod install;
pub mod launch;
pub mod pipeline;

use std::env;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::BuildConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::platform::{self, Os};

/// Env var naming a directory to record cassettes into.
pub const RECORD_ENV: &str = "LITEBUILD_RECORD";

/// Env var naming a cassette file to replay instead of touching the host.
pub const REPLAY_ENV: &str = "LITEBUILD_REPLAY";

/// Dispatch parsed arguments to their handler.
///
/// `--dry-run` wins over `LITEBUILD_REPLAY`, which wins over
/// `LITEBUILD_RECORD`. Without any of them the live adapters are used.
///
/// # Errors
///
/// Returns the configuration error or the failing step's error.
pub fn dispatch(cli: &Cli) -> Result<(), Error> {
    let (ctx, session) = if cli.dry_run {
        (ServiceContext::dry_run(), None)
    } else if let Some(path) = env::var_os(REPLAY_ENV) {
        (ServiceContext::replaying(&PathBuf::from(path))?, None)
    } else if let Some(path) = env::var_os(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(&PathBuf::from(path))?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let result = dispatch_with_context(cli, &ctx);

    // The cassette is written even when the command failed.
    if let Some(session) = session {
        drop(ctx);
        return prefer_command_error(result, finish_recording(session));
    }

    result
}

/// Dispatch a command with the given service context.
///
/// Every command except `init` loads the configuration and resolves the
/// target OS first.
///
/// # Errors
///
/// Returns the selected handler's error.
pub fn dispatch_with_context(cli: &Cli, ctx: &ServiceContext) -> Result<(), Error> {
    match cli.command {
        Some(Command::Init) => init::run(ctx, cli.config.as_deref()),
        None => with_settings(cli, |config, os| pipeline::run(ctx, config, os)),
        Some(Command::Install) => with_settings(cli, |config, os| install::run(ctx, config, os)),
        Some(Command::Build) => with_settings(cli, |config, os| build::run(ctx, config, os)),
        Some(Command::Launch) => with_settings(cli, |config, os| launch::run(ctx, config, os)),
        Some(Command::Clean) => with_settings(cli, |config, os| clean::run(ctx, config, &os)),
        Some(Command::Doctor) => with_settings(cli, |config, os| doctor::run(ctx, config, &os)),
    }
}

fn with_settings<F>(cli: &Cli, step: F) -> Result<(), Error>
where
    F: FnOnce(&BuildConfig, Os) -> Result<(), Error>,
{
    let config = BuildConfig::load(cli.config.as_deref())?;
    let os = cli.os.as_deref().map_or_else(platform::detect_os, Os::from_name);
    log::debug!("target OS {os:?}, config {config:?}");
    step(&config, os)
}

fn finish_recording(session: RecordingSession) -> Result<(), Error> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

/// A failed recording only surfaces when the command itself succeeded.
fn prefer_command_error(
    result: Result<(), Error>,
    recording: Result<(), Error>,
) -> Result<(), Error> {
    match (result, recording) {
        (Err(err), Err(recording_err)) => {
            log::error!("{recording_err}");
            Err(err)
        }
        (Ok(()), Err(recording_err)) => Err(recording_err),
        (result, Ok(())) => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn command_error_outranks_recording_error() {
        let result = prefer_command_error(
            Err(Error::UnsupportedOs("FreeBSD".into())),
            Err(Error::Cassette("Failed to write shell cassette".into())),
        );
        assert_eq!(result.unwrap_err().to_string(), "Unsupported OS: FreeBSD");
    }

    #[test]
    fn recording_error_surfaces_after_success() {
        let result = prefer_command_error(Ok(()), Err(Error::Cassette("disk full".into())));
        assert_eq!(result.unwrap_err().to_string(), "disk full");
        assert!(prefer_command_error(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn init_skips_config_loading() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("fresh.yml");
        let cli = Cli::parse_from(["litebuild", "init", "--config", target.to_str().unwrap()]);

        dispatch_with_context(&cli, &ServiceContext::live()).unwrap();
        assert!(target.exists());
    }
}
