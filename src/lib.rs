//! Core library entry for the `litebuild` CLI.
//!
//! The default invocation detects the host OS, installs the SQLite
//! development package, compiles the configured C source against it and
//! runs the result. Every step shells out; the first non-zero exit aborts.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod platform;
pub mod ports;
pub mod recipe;

pub use error::Error;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`Error::Cli`] when argument parsing fails (including `--help`,
/// which clap reports as an error kind), or the error of the failing step.
pub fn run<I, T>(args: I) -> Result<(), Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    commands::dispatch(&cli)
}
