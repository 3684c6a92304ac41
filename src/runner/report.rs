//! Run reports: captured output plus termination status.

use std::process::ExitStatus;
use std::time::Duration;

use chrono::{DateTime, Utc};

/// The outcome of one console-command invocation.
///
/// Every process outcome lives here — a non-zero exit is data, not an
/// error. Both the raw termination status and the decoded exit code are
/// exposed because the wait-status word and the 0–255 exit code are
/// different values on POSIX systems.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The exact shell command string that was executed.
    pub command: String,
    /// Combined stdout+stderr, trimmed of leading and trailing whitespace.
    pub output: String,
    /// Raw termination status from the process wait.
    pub status: ExitStatus,
    /// Wall-clock time the command was spawned.
    pub started_at: DateTime<Utc>,
    /// Elapsed time from spawn to reaped status.
    pub duration: Duration,
    /// Whether the configured timeout elapsed and the child was killed.
    pub timed_out: bool,
}

impl RunReport {
    /// Decoded exit code, or `None` when the process was terminated by a
    /// signal.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Whether the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// The platform wait-status word.
    ///
    /// On Unix this encodes exit code, signal, and core-dump flag
    /// together; elsewhere it falls back to the decoded exit code, `-1`
    /// when unavailable.
    #[must_use]
    pub fn raw_status(&self) -> i32 {
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            self.status.into_raw()
        }
        #[cfg(not(unix))]
        {
            self.status.code().unwrap_or(-1)
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::process::ExitStatusExt;

    use super::*;

    fn report(status: ExitStatus) -> RunReport {
        RunReport {
            command: String::new(),
            output: String::new(),
            status,
            started_at: Utc::now(),
            duration: Duration::ZERO,
            timed_out: false,
        }
    }

    #[test]
    fn decodes_exit_code_from_wait_status() {
        let report = report(ExitStatus::from_raw(3 << 8));
        assert_eq!(report.code(), Some(3));
        assert_eq!(report.raw_status(), 3 << 8);
        assert!(!report.success());
    }

    #[test]
    fn zero_status_is_success() {
        let report = report(ExitStatus::from_raw(0));
        assert_eq!(report.code(), Some(0));
        assert!(report.success());
    }

    #[test]
    fn signal_termination_has_no_exit_code() {
        let report = report(ExitStatus::from_raw(9));
        assert_eq!(report.code(), None);
        assert_eq!(report.raw_status(), 9);
        assert!(!report.success());
    }
}
