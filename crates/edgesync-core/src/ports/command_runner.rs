//! External process execution port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::CommandResult;

/// Failure to run an external command at all.
///
/// A command that runs and exits non-zero is not a `ProcessError`; the
/// exit code comes back in [`CommandResult`] for the caller to classify.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The process could not be spawned.
    #[error("failed to spawn command: {message}")]
    Spawn {
        /// Underlying error description.
        message: String,
    },

    /// The process was started but waiting on it failed.
    #[error("failed while waiting for command: {message}")]
    Wait {
        /// Underlying error description.
        message: String,
    },
}

/// Runs a shell command line and captures its outcome.
///
/// `env` is a per-invocation environment extension. Credentials travel
/// through here explicitly so that two clients with different
/// credentials can run concurrently in one process without cross-talk.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command_line` through a shell with the extra `env` applied.
    async fn run(
        &self,
        command_line: &str,
        env: &[(String, String)],
    ) -> Result<CommandResult, ProcessError>;
}
