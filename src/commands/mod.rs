//! Command dispatch and handlers.

pub mod interpreter;
pub mod run;

use std::process::ExitCode;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<ExitCode, String> {
    match command {
        Command::Run {
            entry_point,
            interpreter,
            timeout,
            aliases,
            json,
            command,
        } => run::run(
            entry_point.as_deref(),
            interpreter.as_deref(),
            *timeout,
            aliases,
            *json,
            command,
        ),
        Command::Interpreter { interpreter } => interpreter::run(interpreter.as_deref()),
    }
}
