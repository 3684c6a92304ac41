//! Shell command-string construction.
//!
//! The full command is a plain five-part concatenation; the trailing
//! `2>&1` makes the platform shell merge the child's stderr into the
//! captured pipe. No escaping or validation is performed: the caller
//! owns the command-line contents, including the injection surface that
//! comes with concatenating into a shell string.

use std::path::Path;

/// Flag appended after the caller's command line so the entry point
/// suppresses colorized output.
pub const NO_COLOR_FLAG: &str = "--no-color";

/// Shell redirection merging stderr into the captured stdout pipe.
pub const MERGE_STDERR: &str = "2>&1";

/// Returns the platform shell and its command flag.
#[must_use]
pub fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(windows) {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}

/// Builds the full shell command string for one invocation:
/// interpreter, entry point, the caller's command line verbatim, the
/// no-color flag, and the stderr redirection, separated by single
/// spaces.
#[must_use]
pub fn build(interpreter: &Path, entry_point: &str, command_line: &str) -> String {
    format!(
        "{} {entry_point} {command_line} {NO_COLOR_FLAG} {MERGE_STDERR}",
        interpreter.display()
    )
}
