//! Wrapper error taxonomy
//!
//! The wrapper's own failures are kept distinct from the delegated
//! script's reported exit status: activation or spawn failures mean the
//! auth routine never ran, and surface as the sentinel exit code.

use thiserror::Error;

use crate::delegate::DelegateError;
use crate::env::EnvError;

/// Exit code used when the wrapper fails before the delegated routine
/// could run (environment activation or spawn failure)
///
/// clap reserves 2 for usage errors, so a different code is needed for
/// callers to tell "bad flags" from "activation failed".
pub const EXIT_ACTIVATION_FAILED: i32 = 3;

/// A failure of the wrapper itself
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error(transparent)]
    Delegate(#[from] DelegateError),
}

impl BootstrapError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::Env(_) | BootstrapError::Delegate(_) => EXIT_ACTIVATION_FAILED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_code_avoids_clap_usage_error_code() {
        assert_ne!(EXIT_ACTIVATION_FAILED, 2);
        assert_eq!(EXIT_ACTIVATION_FAILED, 3);
    }

    #[test]
    fn env_failure_uses_sentinel_code() {
        let err = BootstrapError::from(EnvError::EnvNotFound {
            name: "Test001".to_string(),
        });
        assert_eq!(err.exit_code(), EXIT_ACTIVATION_FAILED);
        assert!(err.to_string().contains("Test001"));
    }

    #[test]
    fn spawn_failure_uses_sentinel_code() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = BootstrapError::from(DelegateError::SpawnFailed {
            command: "conda run".to_string(),
            source: io,
        });
        assert_eq!(err.exit_code(), EXIT_ACTIVATION_FAILED);
    }
}
