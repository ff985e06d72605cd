//! Record/replay integration tests.
//!
//! Cassettes stand in for the host so the full pipeline, including its
//! failure paths, can run without a package manager or compiler.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::json;

use litebuild::cassette::recorder::CassetteRecorder;
use litebuild::config::BuildConfig;
use litebuild::context::ServiceContext;
use litebuild::orchestrator::{Orchestrator, Stage};
use litebuild::platform::Os;

fn run_litebuild(dir: &Path, envs: &[(&str, &PathBuf)], args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_litebuild"));
    command
        .args(args)
        .current_dir(dir)
        .env("RUST_LOG", "error")
        .env_remove("LITEBUILD_RECORD")
        .env_remove("LITEBUILD_REPLAY")
        .env_remove("LITEBUILD_OUTPUT");
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().expect("failed to run litebuild binary")
}

fn record_run(recorder: &mut CassetteRecorder, program: &str, args: &[&str], exit_code: i32) {
    recorder.record(
        "shell",
        "run",
        json!({"program": program, "args": args}),
        json!({"Ok": {"exit_code": exit_code}}),
    );
}

fn linux_cassette(path: &Path, install_exit: i32) -> PathBuf {
    let mut recorder = CassetteRecorder::new(path, "linux-pipeline", "abc123");
    record_run(&mut recorder, "sudo", &["apt", "update"], 0);
    record_run(&mut recorder, "sudo", &["apt", "install", "-y", "libsqlite3-dev"], install_exit);
    record_run(&mut recorder, "gcc", &["program.c", "-o", "program", "-lsqlite3"], 0);
    record_run(&mut recorder, "./program", &[], 0);
    recorder.finish().expect("recording should succeed")
}

#[test]
fn replayed_pipeline_succeeds_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let cassette = linux_cassette(&dir.path().join("ok.cassette.yaml"), 0);

    let ctx = ServiceContext::replaying(&cassette).unwrap();
    let config = BuildConfig::default();
    let mut orchestrator = Orchestrator::new(&config, Os::Linux, ctx.shell.as_ref());

    orchestrator.run().unwrap();
    assert_eq!(orchestrator.stage(), Stage::Completed);
}

#[test]
fn replayed_install_failure_aborts_the_binary_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let cassette = linux_cassette(&dir.path().join("fail.cassette.yaml"), 100);

    let output = run_litebuild(dir.path(), &[("LITEBUILD_REPLAY", &cassette)], &["--os", "linux"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains(
        "Command failed: sudo apt update && sudo apt install -y libsqlite3-dev (exit status 100)"
    ));
    assert!(!stdout.contains("gcc"));
    assert!(!stdout.contains("Launching"));
}

#[test]
fn replayed_pipeline_rejects_a_different_command() {
    let dir = tempfile::tempdir().unwrap();
    let cassette = linux_cassette(&dir.path().join("linux.cassette.yaml"), 0);

    // The cassette holds apt commands; macOS asks for brew first.
    let output = run_litebuild(dir.path(), &[("LITEBUILD_REPLAY", &cassette)], &["--os", "macos"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("cassette mismatch"));
}

#[test]
fn replay_past_the_end_of_the_cassette_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.cassette.yaml");
    let mut recorder = CassetteRecorder::new(&path, "short", "abc123");
    record_run(&mut recorder, "sudo", &["apt", "update"], 0);
    let cassette = recorder.finish().unwrap();

    let output = run_litebuild(dir.path(), &[("LITEBUILD_REPLAY", &cassette)], &["--os", "linux"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr
        .contains("Cassette exhausted: all 1 interactions for shell::run have been consumed"));
    assert!(!stderr.contains("panicked"));
}

fn session_cassette(base: &Path, port: &str) -> PathBuf {
    let session_dir = std::fs::read_dir(base)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .find(|p| p.is_dir())
        .expect("recording session directory");
    session_dir.join(format!("{port}.cassette.yaml"))
}

/// Stderr without the recording notice, which only the recording run prints.
fn diagnostics(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| !line.starts_with("Recording saved to:"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(unix)]
#[test]
fn recorded_launch_failure_replays_identically() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let program = dir.path().join("exit-three.sh");
    std::fs::write(&program, "#!/bin/sh\nexit 3\n").unwrap();
    std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
    let cassettes = dir.path().join("cassettes");

    let recorded = run_litebuild(
        dir.path(),
        &[("LITEBUILD_RECORD", &cassettes), ("LITEBUILD_OUTPUT", &program)],
        &["launch", "--os", "linux"],
    );
    assert_eq!(recorded.status.code(), Some(1));
    let expected = format!("Command failed: {} (exit status 3)", program.display());
    assert!(diagnostics(&recorded).contains(&expected), "stderr: {}", diagnostics(&recorded));

    let shell_cassette = session_cassette(&cassettes, "shell");
    std::fs::remove_file(&program).unwrap();

    let replayed = run_litebuild(
        dir.path(),
        &[("LITEBUILD_REPLAY", &shell_cassette), ("LITEBUILD_OUTPUT", &program)],
        &["launch", "--os", "linux"],
    );
    assert_eq!(replayed.status.code(), Some(1));
    assert_eq!(diagnostics(&replayed), diagnostics(&recorded));
    assert_eq!(replayed.stdout, recorded.stdout);
}

#[test]
fn recorded_clean_replays_identically() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("program"), "binary").unwrap();
    let cassettes = dir.path().join("cassettes");

    // Phase 1: record a real clean.
    let recorded = run_litebuild(
        dir.path(),
        &[("LITEBUILD_RECORD", &cassettes)],
        &["clean", "--os", "linux"],
    );
    assert!(recorded.status.success());
    assert!(!dir.path().join("program").exists());

    let fs_cassette = session_cassette(&cassettes, "fs");
    assert!(fs_cassette.exists());

    // Phase 2: replay twice; the file is gone but the cassette remembers it.
    for _ in 0..2 {
        let replayed = run_litebuild(
            dir.path(),
            &[("LITEBUILD_REPLAY", &fs_cassette)],
            &["clean", "--os", "linux"],
        );
        assert!(replayed.status.success());
        assert_eq!(
            String::from_utf8_lossy(&replayed.stdout),
            String::from_utf8_lossy(&recorded.stdout)
        );
    }
}
