//! `litebuild build` command.

use crate::config::BuildConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::orchestrator::Orchestrator;
use crate::platform::Os;

/// Compile the source file without installing or launching.
///
/// # Errors
///
/// Returns the compiler's failure.
pub fn run(ctx: &ServiceContext, config: &BuildConfig, os: Os) -> Result<(), Error> {
    let output = config.output_file(&os);
    Orchestrator::new(config, os, ctx.shell.as_ref()).build_program()?;
    println!("Compilation successful: {output}");
    Ok(())
}
