//! Result of running an external command.

/// Exit code and captured output of one external process invocation.
///
/// Output lines are the combined stdout/stderr stream in arrival order
/// (sync commands redirect stderr into stdout on the shell side).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code; `-1` if the process was killed by a signal.
    pub exit_code: i32,
    /// Captured output, one entry per line.
    pub output_lines: Vec<String>,
}

impl CommandResult {
    /// Whether the command exited cleanly.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}
