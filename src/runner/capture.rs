//! Pipe-based process capture: spawn, stream-drain, wait.

use std::io::{self, BufRead, BufReader, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use wait_timeout::ChildExt;

use super::command_line::shell_invocation;

/// Raw result of one shell capture.
#[derive(Debug)]
pub(crate) struct Captured {
    /// Accumulated bytes from the child's piped stdout.
    pub output: Vec<u8>,
    /// Termination status from the wait.
    pub status: ExitStatus,
    /// Whether the timeout elapsed and the child was killed.
    pub timed_out: bool,
}

/// Runs `full_command` through the platform shell and captures its piped
/// stdout to end-of-stream.
///
/// A reader thread drains the pipe while this thread waits, so a child
/// writing more than the pipe buffer can never deadlock the wait. The
/// child is reaped on every path, including the timeout kill.
pub(crate) fn run_shell(full_command: &str, timeout: Option<Duration>) -> io::Result<Captured> {
    let mut child = spawn_shell(full_command, timeout.is_some())?;

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| io::Error::other("child stdout was not piped"))?;
    let reader = thread::spawn(move || drain(stdout));

    let (status, timed_out) = match timeout {
        None => (child.wait()?, false),
        Some(limit) => wait_bounded(&mut child, limit)?,
    };

    let output = reader
        .join()
        .map_err(|_| io::Error::other("output reader thread panicked"))??;
    tracing::debug!(bytes = output.len(), timed_out, "console command drained");

    Ok(Captured { output, status, timed_out })
}

/// Spawns the platform shell on the command string with stdout piped.
///
/// On Unix a timed run's shell leads its own process group so the
/// timeout kill reaches the entry point's descendants, not just the
/// shell. Untimed runs keep the caller's group, leaving terminal access
/// intact for entry points that read stdin.
fn spawn_shell(full_command: &str, own_group: bool) -> io::Result<Child> {
    let (shell, flag) = shell_invocation();
    let mut command = Command::new(shell);
    command.arg(flag).arg(full_command).stdout(Stdio::piped());
    #[cfg(unix)]
    if own_group {
        use std::os::unix::process::CommandExt;
        command.process_group(0);
    }
    #[cfg(not(unix))]
    let _ = own_group;
    command.spawn()
}

/// Reads the pipe line by line until end-of-stream.
fn drain(stdout: impl Read) -> io::Result<Vec<u8>> {
    let mut lines = BufReader::new(stdout);
    let mut accumulated = Vec::new();
    loop {
        let read = lines.read_until(b'\n', &mut accumulated)?;
        if read == 0 {
            return Ok(accumulated);
        }
    }
}

/// Waits up to `limit`, killing and reaping the child on expiry.
fn wait_bounded(child: &mut Child, limit: Duration) -> io::Result<(ExitStatus, bool)> {
    match child.wait_timeout(limit)? {
        Some(status) => Ok((status, false)),
        None => {
            tracing::warn!(
                timeout_secs = limit.as_secs_f64(),
                "console command exceeded its timeout, killing"
            );
            kill_group(child)?;
            let status = child.wait()?;
            Ok((status, true))
        }
    }
}

/// Kills the child's whole process group where possible, the child alone
/// otherwise. The deadline has already passed, so this is a hard kill.
fn kill_group(child: &mut Child) -> io::Result<()> {
    #[cfg(unix)]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        if let Ok(pid) = i32::try_from(child.id()) {
            // Negative pid addresses the group the shell leads.
            if kill(Pid::from_raw(-pid), Signal::SIGKILL).is_ok() {
                return Ok(());
            }
        }
    }
    child.kill()
}
