//! Production command runner over tokio's process facility.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use edgesync_core::{CommandResult, CommandRunner, ProcessError};

/// Runs command lines through `sh -c`, capturing exit code and output.
///
/// The child is killed if the returned future is dropped, so racing a
/// run against a cancellation token also tears the process down.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        command_line: &str,
        env: &[(String, String)],
    ) -> Result<CommandResult, ProcessError> {
        let mut command = Command::new("sh");
        command
            .arg("-c")
            .arg(command_line)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        for (name, value) in env {
            command.env(name, value);
        }

        let output = command.output().await.map_err(|e| ProcessError::Spawn {
            message: e.to_string(),
        })?;

        let exit_code = output.status.code().unwrap_or(-1);
        let mut output_lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect();
        output_lines.extend(
            String::from_utf8_lossy(&output.stderr)
                .lines()
                .map(str::to_string),
        );

        Ok(CommandResult {
            exit_code,
            output_lines,
        })
    }
}

// ============================================================================
// Fake Runner for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// One call as the fake runner saw it.
    pub type SeenCall = (String, Vec<(String, String)>);

    /// A fake runner returning a canned result and recording calls.
    #[derive(Clone)]
    pub struct FakeRunner {
        exit_code: i32,
        output_lines: Vec<String>,
        hang: bool,
        seen: Arc<Mutex<Vec<SeenCall>>>,
    }

    impl FakeRunner {
        /// Succeed with exit code 0 and no output.
        pub fn succeeding() -> Self {
            Self::with_result(0, Vec::new())
        }

        /// Exit with the given code and output lines.
        pub fn with_result(exit_code: i32, output_lines: Vec<String>) -> Self {
            Self {
                exit_code,
                output_lines,
                hang: false,
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Record the call, then never complete.
        pub fn hanging() -> Self {
            Self {
                exit_code: 0,
                output_lines: Vec::new(),
                hang: true,
                seen: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Calls recorded so far.
        pub fn calls(&self) -> Vec<SeenCall> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommandRunner for FakeRunner {
        async fn run(
            &self,
            command_line: &str,
            env: &[(String, String)],
        ) -> Result<CommandResult, ProcessError> {
            self.seen
                .lock()
                .unwrap()
                .push((command_line.to_string(), env.to_vec()));

            if self.hang {
                std::future::pending::<()>().await;
            }

            Ok(CommandResult {
                exit_code: self.exit_code,
                output_lines: self.output_lines.clone(),
            })
        }
    }
}
