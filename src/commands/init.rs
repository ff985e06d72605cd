//! `litebuild init` command.

use std::path::Path;

use crate::config::{BuildConfig, DEFAULT_CONFIG_FILE};
use crate::context::ServiceContext;
use crate::error::Error;

/// Write the default configuration to `target`, or `litebuild.yml`.
///
/// An existing file is never overwritten.
///
/// # Errors
///
/// Returns [`Error::ConfigExists`] if the file is already there, or
/// [`Error::ConfigWrite`] if it cannot be written.
pub fn run(ctx: &ServiceContext, target: Option<&Path>) -> Result<(), Error> {
    let path = target.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    if ctx.fs.exists(path).map_err(|e| Error::Cassette(e.to_string()))? {
        return Err(Error::ConfigExists(path.to_path_buf()));
    }

    let yaml = serde_yaml::to_string(&BuildConfig::default()).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    ctx.fs.write_file(path, &yaml).map_err(|source| Error::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })?;

    println!("Created {}", path.display());
    Ok(())
}
