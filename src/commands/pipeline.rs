//! Default `litebuild` invocation: install, build, launch.

use crate::config::BuildConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::orchestrator::Orchestrator;
use crate::platform::Os;

/// Run every step in order.
///
/// # Errors
///
/// Returns the first failing step's error.
pub fn run(ctx: &ServiceContext, config: &BuildConfig, os: Os) -> Result<(), Error> {
    Orchestrator::new(config, os, ctx.shell.as_ref()).run()
}
