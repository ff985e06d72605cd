//! `litebuild clean` command.

use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::context::ServiceContext;
use crate::error::Error;
use crate::platform::Os;

/// Remove the executable a build would produce, if it exists.
///
/// # Errors
///
/// Returns [`Error::Clean`] if the file exists but cannot be removed, or
/// [`Error::Cassette`] if a replayed cassette cannot answer the lookup.
pub fn run(ctx: &ServiceContext, config: &BuildConfig, os: &Os) -> Result<(), Error> {
    let path = PathBuf::from(config.output_file(os));
    let exists = ctx.fs.exists(&path).map_err(|e| Error::Cassette(e.to_string()))?;
    if !exists {
        println!("Nothing to clean");
        return Ok(());
    }
    ctx.fs.remove_file(&path).map_err(|source| Error::Clean {
        path: path.clone(),
        source,
    })?;
    println!("Removed {}", path.display());
    Ok(())
}
