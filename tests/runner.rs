//! Integration tests for the console runner against real shell scripts.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use conrun::adapters::MapResolver;
use conrun::{ConsoleRunner, RunnerConfig};

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("conrun_runner_{name}"));
    fs::create_dir_all(&dir).expect("failed to create test dir");
    dir
}

fn write_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("console.sh");
    fs::write(&path, body).expect("failed to write script");
    path
}

fn sh_runner(entry_point: &str, timeout: Option<Duration>) -> ConsoleRunner {
    ConsoleRunner::new(RunnerConfig {
        entry_point: entry_point.to_string(),
        interpreter: Some(PathBuf::from("sh")),
        timeout,
    })
}

#[test]
fn captures_combined_stream_in_order() {
    let dir = test_dir("combined");
    let script = write_script(&dir, "echo out\necho err >&2\nexit 3\n");

    let runner = sh_runner(&script.display().to_string(), None);
    let report = runner.run("status").expect("run failed");

    assert_eq!(report.output, "out\nerr");
    assert_eq!(report.code(), Some(3));
    assert!(!report.success());
    assert!(report.command.ends_with("--no-color 2>&1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn trims_surrounding_whitespace() {
    let dir = test_dir("trim");
    let script = write_script(&dir, "printf '\\n\\n  padded  \\n\\n'\n");

    let runner = sh_runner(&script.display().to_string(), None);
    let report = runner.run("status").expect("run failed");

    assert_eq!(report.output, "padded");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn silent_child_yields_empty_output() {
    let dir = test_dir("silent");
    let script = write_script(&dir, "exit 0\n");

    let runner = sh_runner(&script.display().to_string(), None);
    let report = runner.run("noop").expect("run failed");

    assert_eq!(report.output, "");
    assert!(report.success());
    assert_eq!(report.code(), Some(0));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn repeated_runs_are_deterministic() {
    let dir = test_dir("repeat");
    let script = write_script(&dir, "echo same\nexit 2\n");

    let runner = sh_runner(&script.display().to_string(), None);
    let first = runner.run("status").expect("first run failed");
    let second = runner.run("status").expect("second run failed");

    assert_eq!(first.output, second.output);
    assert_eq!(first.code(), second.code());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn no_color_flag_reaches_entry_point() {
    let dir = test_dir("no_color");
    let script = write_script(&dir, "printf '%s\\n' \"$@\"\n");

    let runner = sh_runner(&script.display().to_string(), None);
    let report = runner.run("migrate/up").expect("run failed");

    // The redirection is consumed by the shell; only the flag reaches
    // the entry point's argument list.
    assert_eq!(report.output, "migrate/up\n--no-color");
    assert!(!report.output.contains("2>&1"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn timeout_kills_runaway_child() {
    let dir = test_dir("timeout");
    let script = write_script(&dir, "echo started\nsleep 5\necho finished\n");

    let runner = sh_runner(
        &script.display().to_string(),
        Some(Duration::from_millis(200)),
    );
    let report = runner.run("hang").expect("run failed");

    assert!(report.timed_out);
    assert_eq!(report.output, "started");
    assert_eq!(report.code(), None);
    assert!(report.duration < Duration::from_secs(4));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn alias_resolution_via_injected_resolver() {
    let dir = test_dir("alias");
    write_script(&dir, "echo ok\n");

    let mut resolver = MapResolver::new();
    resolver.register("app", dir.display().to_string());
    let runner = ConsoleRunner::with_resolver(
        RunnerConfig {
            entry_point: "@app/console.sh".to_string(),
            interpreter: Some(PathBuf::from("sh")),
            timeout: None,
        },
        Box::new(resolver),
    );

    let report = runner.run("ping").expect("run failed");
    assert_eq!(report.output, "ok");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_entry_point_is_reported_not_raised() {
    let runner = sh_runner("/definitely/not/a/real/console", None);
    let report = runner.run("status").expect("run failed");

    // The interpreter's complaint lands in the merged stream.
    assert!(!report.success());
    assert!(!report.output.is_empty());
    assert_eq!(report.code(), Some(127));
}

#[test]
fn stderr_only_failure_scenario() {
    let dir = test_dir("stderr_only");
    let script = write_script(&dir, "echo 'error: bad arg' >&2\nexit 1\n");

    let runner = sh_runner(&script.display().to_string(), None);
    let report = runner.run("broken").expect("run failed");

    assert_eq!(report.output, "error: bad arg");
    assert_eq!(report.code(), Some(1));

    let _ = fs::remove_dir_all(&dir);
}
