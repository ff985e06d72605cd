//! The install, build, launch pipeline.
//!
//! Steps run strictly in order and the first failure ends the run. There is
//! no retry and nothing is rolled back: a half-installed package or a stale
//! binary stays where the failing command left it.

use std::fmt;

use crate::config::BuildConfig;
use crate::error::Error;
use crate::platform::Os;
use crate::ports::ShellExecutor;
use crate::recipe::{self, Invocation};

/// Where the pipeline currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// OS identified, nothing run yet.
    Detect,
    /// Installing the SQLite development package.
    Install,
    /// Compiling the source file.
    Build,
    /// Running the built executable.
    Launch,
    /// Every step succeeded.
    Completed,
    /// A step failed; nothing further runs.
    Aborted,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Detect => "detect",
            Self::Install => "install",
            Self::Build => "build",
            Self::Launch => "launch",
            Self::Completed => "completed",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Drives the pipeline for one OS and configuration through a shell port.
pub struct Orchestrator<'a> {
    config: &'a BuildConfig,
    os: Os,
    shell: &'a dyn ShellExecutor,
    stage: Stage,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator in the [`Stage::Detect`] state.
    #[must_use]
    pub fn new(config: &'a BuildConfig, os: Os, shell: &'a dyn ShellExecutor) -> Self {
        Self {
            config,
            os,
            shell,
            stage: Stage::Detect,
        }
    }

    /// The current pipeline stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Runs install, build and launch in order.
    ///
    /// # Errors
    ///
    /// Returns the first step's error; later steps are not attempted and the
    /// stage is left at [`Stage::Aborted`].
    pub fn run(&mut self) -> Result<(), Error> {
        let steps: [(Stage, fn(&mut Self) -> Result<(), Error>); 3] = [
            (Stage::Install, Self::install_dependency),
            (Stage::Build, Self::build_program),
            (Stage::Launch, Self::launch_program),
        ];
        for (stage, step) in steps {
            self.enter(stage);
            if let Err(err) = step(self) {
                log::debug!("aborting during {stage}: {err}");
                self.stage = Stage::Aborted;
                return Err(err);
            }
        }
        self.enter(Stage::Completed);
        Ok(())
    }

    /// Installs the SQLite development package with the OS package manager.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOs`] before running anything on an
    /// unrecognised OS, or the failure of the install command.
    pub fn install_dependency(&mut self) -> Result<(), Error> {
        let invocation = recipe::install_invocation(&self.os)?;
        match self.config.compatibility_shell(&self.os) {
            Some(shell) => println!("Detected {}, using {}", self.os, shell.display()),
            None => println!("Detected {}", self.os),
        }
        self.run_command(&invocation, self.wants_compatibility_shell())?;
        Ok(())
    }

    /// Compiles the configured source file against SQLite.
    ///
    /// # Errors
    ///
    /// Returns the failure of the compiler command.
    pub fn build_program(&mut self) -> Result<(), Error> {
        let invocation = recipe::build_invocation(&self.os, self.config);
        self.run_command(&invocation, self.wants_compatibility_shell())?;
        Ok(())
    }

    /// Runs the built executable.
    ///
    /// # Errors
    ///
    /// Returns the failure of the program itself.
    pub fn launch_program(&mut self) -> Result<(), Error> {
        println!("Launching {}...", self.config.output_file(&self.os));
        let invocation = recipe::launch_invocation(&self.os, self.config);
        self.run_command(&invocation, self.wants_compatibility_shell())?;
        Ok(())
    }

    /// Executes an invocation, inside the compatibility shell when asked to.
    ///
    /// Returns the (zero) exit status on success.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandFailed`] for a non-zero exit and
    /// [`Error::Spawn`] when a command cannot be started. Either way the
    /// remaining commands of the invocation are skipped.
    pub fn run_command(
        &self,
        invocation: &Invocation,
        use_compatibility_shell: bool,
    ) -> Result<i32, Error> {
        let shell = if use_compatibility_shell {
            self.config.compatibility_shell(&self.os)
        } else {
            None
        };
        let commands = match shell {
            Some(shell) => vec![invocation.wrapped_in(shell)],
            None => invocation.commands().to_vec(),
        };

        let display = invocation.to_string();
        match shell {
            Some(_) => println!("Running: {}", commands[0]),
            None => println!("Running: {display}"),
        }

        for command in &commands {
            let output = self.shell.run(command).map_err(|source| Error::Spawn {
                command: display.clone(),
                source,
            })?;
            if !output.success() {
                return Err(Error::CommandFailed {
                    command: display,
                    exit_code: output.exit_code,
                });
            }
        }
        Ok(0)
    }

    fn wants_compatibility_shell(&self) -> bool {
        self.config.compatibility_shell(&self.os).is_some()
    }

    fn enter(&mut self, stage: Stage) {
        log::debug!("stage {} -> {stage}", self.stage);
        self.stage = stage;
    }
}
