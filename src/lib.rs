//! Run application console commands through their interpreter and
//! capture what they print.
//!
//! The embeddable surface is [`ConsoleRunner`]: it composes the shell
//! command string, runs it, and returns a [`RunReport`] with the trimmed
//! output and the child's termination status. A non-zero exit is data in
//! the report, never an `Err`.
//!
//! ```no_run
//! use conrun::{ConsoleRunner, RunnerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let runner = ConsoleRunner::new(RunnerConfig {
//!     entry_point: "/opt/app/cli".to_string(),
//!     interpreter: Some("/usr/bin/php".into()),
//!     ..RunnerConfig::default()
//! });
//! let report = runner.run("migrate/up --interactive=0")?;
//! println!("{} (exit code {:?})", report.output, report.code());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod ports;
pub mod runner;

pub use runner::{ConsoleRunner, RunReport, RunnerConfig, DEFAULT_ENTRY_POINT};

use std::process::ExitCode;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<ExitCode, String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version are successful exits, not errors.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
