//! Crate-wide error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a `litebuild` run.
///
/// Every variant is fatal: the binary prints it on one line and exits
/// non-zero. Nothing is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The host OS has no install recipe.
    #[error("Unsupported OS: {0}")]
    UnsupportedOs(String),

    /// A command ran and exited with a non-zero status.
    #[error("Command failed: {command} (exit status {exit_code})")]
    CommandFailed {
        /// The command as displayed to the user, before shell wrapping.
        command: String,
        /// The exit status reported for the process (`-1` if killed by a signal).
        exit_code: i32,
    },

    /// A command could not be started at all.
    #[error("Command failed: {command} ({source})")]
    Spawn {
        /// The command as displayed to the user, before shell wrapping.
        command: String,
        /// Why the process could not be started.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::config::BuildConfig`].
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// `init` refuses to overwrite an existing configuration file.
    #[error("{} already exists", .0.display())]
    ConfigExists(PathBuf),

    /// `init` could not produce or write the configuration file.
    #[error("Failed to write config {}: {source}", .path.display())]
    ConfigWrite {
        /// Path of the configuration file.
        path: PathBuf,
        /// Why writing failed.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The configuration parsed but holds unusable values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The built executable could not be removed.
    #[error("Failed to remove {}: {source}", .path.display())]
    Clean {
        /// Path that could not be removed.
        path: PathBuf,
        /// Why removal failed.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// `doctor` found tools that are not reachable.
    #[error("Missing tools: {}", .0.join(", "))]
    MissingTools(Vec<String>),

    /// A cassette could not be created, loaded or written.
    #[error("{0}")]
    Cassette(String),

    /// Command-line parsing failed or help/version was requested.
    #[error(transparent)]
    Cli(#[from] clap::Error),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn unsupported_os_names_the_os() {
        let err = Error::UnsupportedOs("FreeBSD".into());
        assert_eq!(err.to_string(), "Unsupported OS: FreeBSD");
    }

    #[test]
    fn command_failure_names_the_command() {
        let err = Error::CommandFailed {
            command: "gcc program.c -o program -lsqlite3".into(),
            exit_code: 1,
        };
        assert_eq!(
            err.to_string(),
            "Command failed: gcc program.c -o program -lsqlite3 (exit status 1)"
        );
    }

    #[test]
    fn existing_config_is_named() {
        let err = Error::ConfigExists("litebuild.yml".into());
        assert_eq!(err.to_string(), "litebuild.yml already exists");
    }

    #[test]
    fn missing_tools_are_listed() {
        let err = Error::MissingTools(vec!["gcc".into(), "brew".into()]);
        assert_eq!(err.to_string(), "Missing tools: gcc, brew");
    }
}
