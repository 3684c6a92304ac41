//! `conrun run` command.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::adapters::map::MapResolver;
use crate::runner::{ConsoleRunner, RunReport, RunnerConfig, DEFAULT_ENTRY_POINT};

/// JSON shape of a finished run, for `--json` output.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    command: &'a str,
    output: &'a str,
    exit_code: Option<i32>,
    raw_status: i32,
    timed_out: bool,
    duration_ms: u128,
    started_at: DateTime<Utc>,
}

/// Execute the `run` command.
///
/// Prints the command's captured output and exits with the command's own
/// exit code, so shell callers can chain on success or failure.
///
/// # Errors
///
/// Returns an error string if an alias flag is malformed, the entry
/// point alias does not resolve, or the shell cannot be spawned.
pub fn run(
    entry_point: Option<&str>,
    interpreter: Option<&Path>,
    timeout: Option<u64>,
    aliases: &[String],
    json: bool,
    command: &[String],
) -> Result<ExitCode, String> {
    let config = RunnerConfig {
        entry_point: entry_point.map_or_else(default_entry_point, str::to_string),
        interpreter: interpreter.map(Path::to_path_buf).or_else(env_interpreter),
        timeout: timeout.map(Duration::from_secs),
    };
    let runner = match build_resolver(aliases)? {
        Some(resolver) => ConsoleRunner::with_resolver(config, Box::new(resolver)),
        None => ConsoleRunner::new(config),
    };

    let command_line = command.join(" ");
    let report = runner
        .run(&command_line)
        .map_err(|e| format!("Failed to run console command: {e}"))?;

    if json {
        print_json(&report)?;
    } else {
        if !report.output.is_empty() {
            println!("{}", report.output);
        }
        if report.timed_out {
            eprintln!("Command timed out and was killed");
        }
    }

    Ok(child_exit_code(&report))
}

/// Build a [`MapResolver`] from repeated `NAME=PATH` flags.
fn build_resolver(aliases: &[String]) -> Result<Option<MapResolver>, String> {
    if aliases.is_empty() {
        return Ok(None);
    }
    let mut resolver = MapResolver::new();
    for pair in aliases {
        let (name, target) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid alias {pair}: expected NAME=PATH"))?;
        resolver.register(name, target);
    }
    Ok(Some(resolver))
}

fn print_json(report: &RunReport) -> Result<(), String> {
    let view = JsonReport {
        command: &report.command,
        output: &report.output,
        exit_code: report.code(),
        raw_status: report.raw_status(),
        timed_out: report.timed_out,
        duration_ms: report.duration.as_millis(),
        started_at: report.started_at,
    };
    let rendered = serde_json::to_string_pretty(&view)
        .map_err(|e| format!("Failed to serialize run report: {e}"))?;
    println!("{rendered}");
    Ok(())
}

/// Map the child's exit code onto this process's exit code.
fn child_exit_code(report: &RunReport) -> ExitCode {
    match report.code() {
        Some(code) => u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from),
        None => ExitCode::FAILURE,
    }
}

fn default_entry_point() -> String {
    env::var("CONRUN_ENTRY_POINT").unwrap_or_else(|_| DEFAULT_ENTRY_POINT.to_string())
}

fn env_interpreter() -> Option<PathBuf> {
    env::var("CONRUN_INTERPRETER").ok().map(PathBuf::from)
}
