//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `conrun`.
#[derive(Debug, Parser)]
#[command(
    name = "conrun",
    version,
    about = "Run application console commands and capture their output"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run a console command and print its captured output.
    Run {
        /// Console entry point script (falls back to CONRUN_ENTRY_POINT,
        /// then ./console).
        #[arg(long)]
        entry_point: Option<String>,
        /// Interpreter executable (falls back to CONRUN_INTERPRETER, then
        /// the running binary).
        #[arg(long)]
        interpreter: Option<PathBuf>,
        /// Kill the command after this many seconds.
        #[arg(long, value_name = "SECONDS")]
        timeout: Option<u64>,
        /// Register a path alias for the entry point. Repeatable.
        #[arg(long = "alias", value_name = "NAME=PATH")]
        aliases: Vec<String>,
        /// Print the full run report as JSON instead of the bare output.
        #[arg(long)]
        json: bool,
        /// Console command line, e.g. `migrate/up --interactive=0`.
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<String>,
    },
    /// Print the interpreter the runner would invoke.
    Interpreter {
        /// Interpreter executable (falls back to CONRUN_INTERPRETER, then
        /// the running binary).
        #[arg(long)]
        interpreter: Option<PathBuf>,
    },
}
