//! Synchronous delegation to an external process
//!
//! The wrapper hands control, not data, to the delegated routine: stdio
//! is inherited, the call blocks until the child exits, and the only
//! thing passed back is the exit status. A spawn failure is a wrapper
//! error; a nonzero exit from the child is not.

use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

/// Errors from starting the delegated process
#[derive(Debug, Error)]
pub enum DelegateError {
    #[error("failed to start `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Exit status of a delegated process that actually ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegateOutcome {
    code: Option<i32>,
}

impl DelegateOutcome {
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }

    #[cfg(test)]
    fn from_code(code: Option<i32>) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to propagate to the caller
    ///
    /// Signal-terminated children report no code; map that to 1.
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

/// Spawn the command and block until it exits
///
/// No retry, no output capture, no corrective action: whatever the
/// delegated routine printed is already on the user's terminal.
pub fn spawn_and_wait(mut command: Command) -> Result<DelegateOutcome, DelegateError> {
    let label = command_label(&command);
    debug!(command = %label, "delegating");

    let status = command
        .status()
        .map_err(|source| DelegateError::SpawnFailed {
            command: label,
            source,
        })?;

    debug!(?status, "delegated process exited");
    Ok(DelegateOutcome::from_status(status))
}

fn command_label(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_zero_is_success() {
        let outcome = DelegateOutcome::from_code(Some(0));
        assert!(outcome.success());
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn outcome_nonzero_propagates_code() {
        let outcome = DelegateOutcome::from_code(Some(3));
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code(), 3);
    }

    #[test]
    fn outcome_signal_maps_to_one() {
        let outcome = DelegateOutcome::from_code(None);
        assert!(!outcome.success());
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn spawn_failure_is_distinct_from_nonzero_exit() {
        let err = spawn_and_wait(Command::new("definitely-not-a-real-binary-ptb")).unwrap_err();
        let DelegateError::SpawnFailed { command, .. } = err;
        assert!(command.contains("definitely-not-a-real-binary-ptb"));
    }

    #[cfg(unix)]
    #[test]
    fn spawn_and_wait_reports_child_exit_code() {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exit 3"]);
        let outcome = spawn_and_wait(cmd).unwrap();
        assert_eq!(outcome.exit_code(), 3);

        let mut cmd = Command::new("sh");
        cmd.args(["-c", "exit 0"]);
        let outcome = spawn_and_wait(cmd).unwrap();
        assert!(outcome.success());
    }

    #[test]
    fn command_label_joins_program_and_args() {
        let mut cmd = Command::new("conda");
        cmd.args(["run", "-n", "pixiv", "python"]);
        assert_eq!(command_label(&cmd), "conda run -n pixiv python");
    }
}
