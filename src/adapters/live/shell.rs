//! Live shell executor using `std::process::Command`.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ports::shell::{CommandSpec, ShellExecutor, ShellOutput};

/// Live executor that spawns the program directly with inherited stdio.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(
        &self,
        command: &CommandSpec,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        log::debug!("spawning {:?} with args {:?}", command.program, command.args);
        let status = Command::new(&command.program).args(&command.args).status()?;
        Ok(ShellOutput {
            exit_code: status.code().unwrap_or(-1),
        })
    }

    fn locate(
        &self,
        program: &str,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(search(program))
    }
}

fn search(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }
    let path = env::var_os("PATH")?;
    env::split_paths(&path).find_map(|dir| executable_in(&dir, program))
}

fn executable_in(dir: &Path, program: &str) -> Option<PathBuf> {
    let direct = dir.join(program);
    if direct.is_file() {
        return Some(direct);
    }
    if cfg!(windows) && Path::new(program).extension().is_none() {
        let with_exe = dir.join(format!("{program}.exe"));
        if with_exe.is_file() {
            return Some(with_exe);
        }
    }
    None
}
