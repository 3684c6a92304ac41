//! Console command runner: compose the command string, shell out, capture.

pub mod command_line;
pub mod report;

mod capture;

pub use report::RunReport;

use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::adapters::literal::LiteralResolver;
use crate::ports::alias::AliasResolver;

/// Entry point used when none is configured.
pub const DEFAULT_ENTRY_POINT: &str = "./console";

/// Settings for a [`ConsoleRunner`].
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the application's console entry point script. May be an
    /// alias understood by the configured [`AliasResolver`].
    pub entry_point: String,
    /// Interpreter executable to run the entry point with. When unset,
    /// the runner falls back to the running executable.
    pub interpreter: Option<PathBuf>,
    /// Upper bound on a command's run time. `None` means wait forever.
    pub timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            interpreter: None,
            timeout: None,
        }
    }
}

/// Runs application console commands through the platform shell and
/// captures their output.
///
/// Commands go through the configured interpreter and entry point, with
/// color output disabled and stderr merged into the captured stream.
/// A command failing is data, not an error: the report carries the
/// termination status and the caller decides what failure means.
pub struct ConsoleRunner {
    config: RunnerConfig,
    resolver: Box<dyn AliasResolver>,
}

impl ConsoleRunner {
    /// Creates a runner that treats entry point paths literally.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_resolver(config, Box::new(LiteralResolver))
    }

    /// Creates a runner with an injected alias resolver for the entry
    /// point path.
    #[must_use]
    pub fn with_resolver(config: RunnerConfig, resolver: Box<dyn AliasResolver>) -> Self {
        Self { config, resolver }
    }

    /// Runs one console command line and captures what it printed.
    ///
    /// Blocks until the command exits or the configured timeout expires.
    /// On timeout the command's whole process group is killed and the
    /// report carries whatever output arrived first, with
    /// [`RunReport::timed_out`] set. Only timed runs lead their own
    /// process group; untimed runs keep the caller's group and its
    /// terminal access.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry point alias does not resolve or
    /// the shell cannot be spawned. A command that runs and exits
    /// non-zero is not an error.
    #[instrument(skip(self, command_line), fields(run_id = %Uuid::new_v4()))]
    pub fn run(
        &self,
        command_line: &str,
    ) -> Result<RunReport, Box<dyn std::error::Error + Send + Sync>> {
        let command = self.command_string(command_line)?;
        debug!(command = %command, "running console command");

        let started_at = Utc::now();
        let started = Instant::now();
        let captured = capture::run_shell(&command, self.config.timeout)?;
        let duration = started.elapsed();

        let output = String::from_utf8_lossy(&captured.output).trim().to_string();
        debug!(status = %captured.status, ?duration, "console command finished");

        Ok(RunReport {
            command,
            output,
            status: captured.status,
            started_at,
            duration,
            timed_out: captured.timed_out,
        })
    }

    /// Builds the full shell command string for a console command line.
    ///
    /// # Errors
    ///
    /// Returns an error when the entry point alias does not resolve.
    pub fn command_string(
        &self,
        command_line: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let entry_point = self.resolver.resolve(&self.config.entry_point)?;
        Ok(command_line::build(
            &self.interpreter_executable(),
            &entry_point,
            command_line,
        ))
    }

    /// The interpreter the runner will invoke.
    ///
    /// A configured interpreter is returned verbatim. Otherwise the
    /// running executable stands in, which suits multi-call binaries
    /// that expose their own console entry point. `sh` is the last
    /// resort when even the current executable cannot be determined.
    #[must_use]
    pub fn interpreter_executable(&self) -> PathBuf {
        match &self.config.interpreter {
            Some(path) => path.clone(),
            None => env::current_exe().unwrap_or_else(|_| PathBuf::from("sh")),
        }
    }
}

impl Default for ConsoleRunner {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}
