//! Per-OS command construction for the install, build and launch steps.
//!
//! Nothing here runs anything. Each function returns the [`Invocation`] a
//! step would execute so the orchestrator, the dry-run output and the tests
//! all see the same commands.

use std::fmt;
use std::path::Path;

use crate::config::BuildConfig;
use crate::error::Error;
use crate::platform::Os;
use crate::ports::CommandSpec;

/// Commands forming one pipeline step, run in order until one fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    commands: Vec<CommandSpec>,
}

impl Invocation {
    /// An invocation of a single command.
    #[must_use]
    pub fn single(command: CommandSpec) -> Self {
        Self {
            commands: vec![command],
        }
    }

    /// An invocation of several commands chained with `&&` semantics.
    #[must_use]
    pub fn chain(commands: Vec<CommandSpec>) -> Self {
        Self { commands }
    }

    /// The commands in execution order.
    #[must_use]
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    /// Folds the whole chain into one command executed by `shell -c`.
    #[must_use]
    pub fn wrapped_in(&self, shell: &Path) -> CommandSpec {
        let script = self
            .commands
            .iter()
            .map(CommandSpec::to_shell_line)
            .collect::<Vec<_>>()
            .join(" && ");
        CommandSpec::new(shell.display().to_string(), ["-c".to_string(), script])
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" && ")?;
            }
            write!(f, "{command}")?;
        }
        Ok(())
    }
}

/// Package manager program each supported OS installs through.
#[must_use]
pub fn package_manager(os: &Os) -> Option<&'static str> {
    match os {
        Os::Windows => Some("pacman"),
        Os::Linux => Some("apt"),
        Os::MacOs => Some("brew"),
        Os::Other(_) => None,
    }
}

/// Install command for the SQLite development package.
///
/// # Errors
///
/// Returns [`Error::UnsupportedOs`] for [`Os::Other`].
pub fn install_invocation(os: &Os) -> Result<Invocation, Error> {
    match os {
        Os::Windows => Ok(Invocation::single(CommandSpec::new(
            "pacman",
            ["-S", "--needed", "mingw-w64-ucrt-x86_64-sqlite3"],
        ))),
        Os::Linux => Ok(Invocation::chain(vec![
            CommandSpec::new("sudo", ["apt", "update"]),
            CommandSpec::new("sudo", ["apt", "install", "-y", "libsqlite3-dev"]),
        ])),
        Os::MacOs => Ok(Invocation::single(CommandSpec::new("brew", ["install", "sqlite"]))),
        Os::Other(name) => Err(Error::UnsupportedOs(name.clone())),
    }
}

/// Compiler command producing the platform executable.
#[must_use]
pub fn build_invocation(os: &Os, config: &BuildConfig) -> Invocation {
    let mut args = vec![
        config.source_file.display().to_string(),
        "-o".to_string(),
        config.output_file(os),
    ];
    args.extend(config.link_flags.iter().cloned());
    Invocation::single(CommandSpec::new(config.compiler.clone(), args))
}

/// Command executing the freshly built binary from the working directory.
#[must_use]
pub fn launch_invocation(os: &Os, config: &BuildConfig) -> Invocation {
    let output = config.output_file(os);
    let program = if Path::new(&output).is_absolute() { output } else { format!("./{output}") };
    Invocation::single(CommandSpec::new(program, Vec::<String>::new()))
}
