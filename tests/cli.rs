//! Integration tests for top-level CLI behavior.
//!
//! Toolchain and transfer programs are replaced through `CHAT_TASKS_CARGO`
//! and `CHAT_TASKS_RSYNC`, so these run without cargo, rsync or a network.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("chat_tasks_cli_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn run_tasks(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_chat-tasks");
    let mut cmd = Command::new(bin);
    cmd.current_dir(dir)
        .args(args)
        .env_remove("CHAT_TASKS_RECORD")
        .env_remove("CHAT_TASKS_REPLAY")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run chat-tasks binary")
}

#[test]
fn list_shows_all_tasks() {
    let dir = workspace("list");
    let output = run_tasks(&dir, &["list"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("build"));
    assert!(stdout.contains("deploy APP HOSTNAME"));
    assert!(stdout.contains("clean"));
}

#[test]
fn deploy_without_hostname_shows_usage_error() {
    let dir = workspace("deploy_usage");
    let output = run_tasks(&dir, &["deploy", "server"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("HOSTNAME"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let dir = workspace("invalid");
    let output = run_tasks(&dir, &["nonsense"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn help_lists_global_flags() {
    let dir = workspace("help");
    let output = run_tasks(&dir, &["--help"], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--dry-run"));
    assert!(stdout.contains("--config"));
}

#[test]
fn missing_explicit_config_fails() {
    let dir = workspace("missing_config");
    let output = run_tasks(&dir, &["--config", "nope.yaml", "build"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("failed to read config file"));
}

#[test]
fn dry_run_touches_nothing() {
    let dir = workspace("dry_run");
    std::fs::create_dir_all(dir.join("logs")).unwrap();
    std::fs::write(dir.join("logs/server.log"), "x").unwrap();

    let output = run_tasks(
        &dir,
        &["--dry-run", "clean"],
        &[("CHAT_TASKS_CARGO", "chat-tasks-no-such-cargo")],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "stderr: {stderr}");
    assert!(stderr.contains("dry run: would execute"));
    assert!(dir.join("logs/server.log").exists());
}

#[test]
fn unknown_toolchain_reports_spawn_failure() {
    let dir = workspace("no_cargo");
    let output = run_tasks(&dir, &["build"], &[("CHAT_TASKS_CARGO", "chat-tasks-no-such-cargo")]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("could not run `chat-tasks-no-such-cargo`"));
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn clean_empties_logs_and_is_idempotent() {
        let dir = workspace("clean_twice");
        std::fs::create_dir_all(dir.join("logs")).unwrap();
        std::fs::write(dir.join("logs/server.log"), "x").unwrap();
        std::fs::write(dir.join("logs/client.log"), "y").unwrap();

        let env = [("CHAT_TASKS_CARGO", "true")];
        assert!(run_tasks(&dir, &["clean"], &env).status.success());
        assert!(dir.join("logs").is_dir());
        assert_eq!(std::fs::read_dir(dir.join("logs")).unwrap().count(), 0);

        assert!(run_tasks(&dir, &["clean"], &env).status.success());
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        assert!(run_tasks(&dir, &["clean"], &env).status.success());
    }

    #[test]
    fn failed_build_exits_non_zero() {
        let dir = workspace("build_fails");
        let output = run_tasks(&dir, &["build"], &[("CHAT_TASKS_CARGO", "false")]);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!output.status.success());
        assert!(stderr.contains("build failed: `false` exited with status 1"));
    }

    #[test]
    fn failed_build_prevents_transfer() {
        let dir = workspace("deploy_build_fails");
        std::fs::create_dir_all(dir.join("target/release")).unwrap();
        std::fs::write(dir.join("target/release/web"), "bin").unwrap();
        // The transfer program would leave a marker file if it ran.
        let rsync = dir.join("fake-rsync.sh");
        std::fs::write(&rsync, "#!/bin/sh\ntouch \"$(dirname \"$0\")/transferred\"\n").unwrap();
        make_executable(&rsync);

        let output = run_tasks(
            &dir,
            &["deploy", "web", "example.com"],
            &[("CHAT_TASKS_CARGO", "false"), ("CHAT_TASKS_RSYNC", rsync.to_str().unwrap())],
        );
        assert!(!output.status.success());
        assert!(!dir.join("transferred").exists());
    }

    #[test]
    fn deploy_hands_artifact_and_destination_to_transfer_tool() {
        let dir = workspace("deploy_args");
        std::fs::create_dir_all(dir.join("target/release")).unwrap();
        std::fs::write(dir.join("target/release/web"), "bin").unwrap();
        let rsync = dir.join("fake-rsync.sh");
        let script = "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/rsync-args\"\n";
        std::fs::write(&rsync, script).unwrap();
        make_executable(&rsync);

        let output = run_tasks(
            &dir,
            &["deploy", "web", "example.com"],
            &[("CHAT_TASKS_CARGO", "true"), ("CHAT_TASKS_RSYNC", rsync.to_str().unwrap())],
        );
        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

        let args = std::fs::read_to_string(dir.join("rsync-args")).unwrap();
        let args: Vec<&str> = args.lines().collect();
        assert_eq!(
            args,
            vec![
                "-P",
                "-a",
                "-v",
                "-z",
                "-v",
                "target/release/web",
                "example.com:~/projects/chat-web/"
            ]
        );
    }

    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(path, perms).unwrap();
    }
}
