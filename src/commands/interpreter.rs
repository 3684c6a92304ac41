//! `conrun interpreter` command.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::runner::{ConsoleRunner, RunnerConfig};

/// Execute the `interpreter` command.
///
/// Prints the interpreter executable the runner would invoke, after
/// applying the CONRUN_INTERPRETER fallback. Useful for checking a
/// deployment's configuration before running anything.
///
/// # Errors
///
/// Never fails today; the signature matches the other handlers.
pub fn run(interpreter: Option<&Path>) -> Result<ExitCode, String> {
    let runner = ConsoleRunner::new(RunnerConfig {
        interpreter: interpreter.map(Path::to_path_buf).or_else(env_interpreter),
        ..RunnerConfig::default()
    });
    println!("{}", runner.interpreter_executable().display());
    Ok(ExitCode::SUCCESS)
}

fn env_interpreter() -> Option<PathBuf> {
    env::var("CONRUN_INTERPRETER").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpreter_command_succeeds() {
        let result = run(Some(Path::new("/usr/bin/php")));
        assert!(result.is_ok());
    }
}
