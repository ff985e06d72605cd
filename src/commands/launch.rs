//! `litebuild launch` command.

use crate::config::BuildConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::orchestrator::Orchestrator;
use crate::platform::Os;

/// Run an executable built earlier.
///
/// # Errors
///
/// Returns the program's failure.
pub fn run(ctx: &ServiceContext, config: &BuildConfig, os: Os) -> Result<(), Error> {
    Orchestrator::new(config, os, ctx.shell.as_ref()).launch_program()
}
