//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `litebuild`.
///
/// With no subcommand the full install, build and launch pipeline runs.
#[derive(Debug, Parser)]
#[command(
    name = "litebuild",
    version,
    about = "Install SQLite, build a C program against it, run it"
)]
pub struct Cli {
    /// Path to a YAML build configuration (defaults to ./litebuild.yml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the commands that would run without executing them.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Treat the host as this OS instead of detecting it.
    #[arg(long, global = true, value_name = "NAME")]
    pub os: Option<String>,

    /// The step to execute. Omit to run every step in order.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Write a default `litebuild.yml` (or the `--config` path).
    Init,
    /// Install the SQLite development package only.
    Install,
    /// Compile the source file only.
    Build,
    /// Run the previously built executable only.
    Launch,
    /// Remove the built executable.
    Clean,
    /// Check that the compiler, package manager and shell are reachable.
    Doctor,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn no_subcommand_means_full_pipeline() {
        let cli = Cli::parse_from(["litebuild"]);
        assert!(cli.command.is_none());
        assert!(!cli.dry_run);
        assert!(cli.os.is_none());
    }

    #[test]
    fn parses_build_subcommand() {
        let cli = Cli::parse_from(["litebuild", "build"]);
        assert_eq!(cli.command, Some(Command::Build));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["litebuild", "install", "--dry-run", "--os", "macos"]);
        assert_eq!(cli.command, Some(Command::Install));
        assert!(cli.dry_run);
        assert_eq!(cli.os.as_deref(), Some("macos"));
    }

    #[test]
    fn parses_init_with_target_path() {
        let cli = Cli::parse_from(["litebuild", "init", "--config", "ci.yml"]);
        assert_eq!(cli.command, Some(Command::Init));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("ci.yml")));
    }

    #[test]
    fn parses_config_path() {
        let cli = Cli::parse_from(["litebuild", "--config", "ci/litebuild.yml", "doctor"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("ci/litebuild.yml")));
        assert_eq!(cli.command, Some(Command::Doctor));
    }
}
