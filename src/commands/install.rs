//! `litebuild install` command.

use crate::config::BuildConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::orchestrator::Orchestrator;
use crate::platform::Os;

/// Install the SQLite development package and stop.
///
/// # Errors
///
/// Returns [`Error::UnsupportedOs`] or the package manager's failure.
pub fn run(ctx: &ServiceContext, config: &BuildConfig, os: Os) -> Result<(), Error> {
    Orchestrator::new(config, os, ctx.shell.as_ref()).install_dependency()?;
    println!("install complete");
    Ok(())
}
