//! Error types for NetStorage sync operations.

use edgesync_core::ProcessError;
use thiserror::Error;

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors produced when compiling or running a sync command.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The include allow-list was empty. An empty list is a caller
    /// error, not "sync nothing".
    #[error("list of files to include cannot be empty")]
    EmptyFileList,

    /// A non-NetStorage host was configured with a relative root
    /// directory, which resolves unpredictably on the remote shell.
    #[error("the NetStorage root directory must be an absolute path (got '{path}')")]
    RootNotAbsolute {
        /// The offending root directory.
        path: String,
    },

    /// The rsync process could not be run at all.
    #[error(transparent)]
    Process(#[from] ProcessError),

    /// rsync ran and exited non-zero.
    #[error("netstorage rsync failed with exit code {exit_code}: {}", output.join("\n"))]
    SyncFailed {
        /// The process exit code.
        exit_code: i32,
        /// Captured output lines, verbatim.
        output: Vec<String>,
    },

    /// The sync was cancelled while the process was running.
    #[error("netstorage rsync cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_failed_message_carries_output_verbatim() {
        let err = SyncError::SyncFailed {
            exit_code: 23,
            output: vec![
                "rsync: link_stat failed".to_string(),
                "rsync error: some files could not be transferred".to_string(),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 23"));
        assert!(msg.contains("link_stat failed"));
        assert!(msg.contains("could not be transferred"));
    }

    #[test]
    fn root_not_absolute_names_the_path() {
        let err = SyncError::RootNotAbsolute {
            path: "directory".to_string(),
        };
        assert!(err.to_string().contains("'directory'"));
    }
}
