//! Replaying adapter for the `ShellExecutor` port.

use std::path::PathBuf;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{CommandSpec, ShellExecutor, ShellOutput};

/// Replays recorded command results from a cassette.
///
/// A command that differs from the recorded one is reported as an error
/// rather than answered with someone else's exit code.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self {
            replayer: Mutex::new(replayer),
        }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(
        &self,
        command: &CommandSpec,
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let (input, output) = next_output(&self.replayer, "shell", "run")?;
        let recorded: CommandSpec = serde_json::from_value(input)
            .map_err(|e| format!("shell::run: recorded input is not a command: {e}"))?;
        if &recorded != command {
            return Err(format!("cassette mismatch: recorded `{recorded}`, got `{command}`").into());
        }
        replay_result(&output, "shell::run")
    }

    fn locate(
        &self,
        _program: &str,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let (_, output) = next_output(&self.replayer, "shell", "locate")?;
        replay_result(&output, "shell::locate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    fn run_interaction(seq: u64, program: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"program": program, "args": []}),
            output,
        }
    }

    #[test]
    fn replays_recorded_exit_code() {
        let replayer = make_replayer(vec![run_interaction(
            0,
            "brew",
            json!({"Ok": {"exit_code": 1}}),
        )]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run(&CommandSpec::new("brew", Vec::<String>::new())).unwrap();
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn replays_spawn_error() {
        let replayer = make_replayer(vec![run_interaction(0, "gcc", json!({"err": "not found"}))]);
        let shell = ReplayingShellExecutor::new(replayer);
        let result = shell.run(&CommandSpec::new("gcc", Vec::<String>::new()));
        assert_eq!(result.unwrap_err().to_string(), "not found");
    }

    #[test]
    fn mismatched_command_is_an_error() {
        let replayer = make_replayer(vec![run_interaction(
            0,
            "brew",
            json!({"Ok": {"exit_code": 0}}),
        )]);
        let shell = ReplayingShellExecutor::new(replayer);
        let err = shell.run(&CommandSpec::new("apt", Vec::<String>::new())).unwrap_err();
        assert!(err.to_string().contains("cassette mismatch"));
    }

    #[test]
    fn replays_locate() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "shell".into(),
                method: "locate".into(),
                input: json!({"program": "gcc"}),
                output: json!("/usr/bin/gcc"),
            },
            Interaction {
                seq: 1,
                port: "shell".into(),
                method: "locate".into(),
                input: json!({"program": "brew"}),
                output: json!(null),
            },
        ]);
        let shell = ReplayingShellExecutor::new(replayer);
        assert_eq!(shell.locate("gcc").unwrap(), Some(PathBuf::from("/usr/bin/gcc")));
        assert_eq!(shell.locate("brew").unwrap(), None);
    }

    #[test]
    fn running_past_the_cassette_is_an_error() {
        let replayer = make_replayer(vec![run_interaction(
            0,
            "sudo",
            json!({"Ok": {"exit_code": 0}}),
        )]);
        let shell = ReplayingShellExecutor::new(replayer);
        shell.run(&CommandSpec::new("sudo", Vec::<String>::new())).unwrap();

        let err = shell.run(&CommandSpec::new("sudo", Vec::<String>::new())).unwrap_err();
        assert!(err.to_string().starts_with("Cassette exhausted"));
        assert!(shell.locate("gcc").unwrap_err().to_string().contains("shell::locate"));
    }
}
