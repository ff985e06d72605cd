//! Shell executor port for running external commands.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A program and its arguments, passed to the OS without shell parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: String,
    /// Arguments in order.
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a command from a program and its arguments.
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the command as a single POSIX shell line.
    #[must_use]
    pub fn to_shell_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The program is shown verbatim so Windows paths stay readable.
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Quotes `word` for a POSIX shell. Plain words pass through unchanged.
#[must_use]
pub fn quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(c, '-' | '_' | '.' | '/' | '=' | ':' | '+' | ',' | '@' | '%')
        });
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// The result of running a command whose output went straight to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process; `-1` when it was killed by a signal.
    pub exit_code: i32,
}

impl ShellOutput {
    /// Returns `true` for a zero exit code.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes external commands.
///
/// Abstracting execution lets the pipeline run for real, as a dry run, or
/// against a recorded cassette.
pub trait ShellExecutor: Send + Sync {
    /// Runs a command with inherited standard streams and waits for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be spawned.
    fn run(
        &self,
        command: &CommandSpec,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;

    /// Finds `program` on the search path. `Ok(None)` means it is not there.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup itself cannot be answered.
    fn locate(
        &self,
        program: &str,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>>;
}
