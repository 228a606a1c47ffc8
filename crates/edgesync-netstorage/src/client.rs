//! The rsync client: validation, compilation and execution.

use tokio_util::sync::CancellationToken;

use edgesync_core::CommandRunner;

use crate::command;
use crate::config::NetStorageConfig;
use crate::error::{SyncError, SyncResult};
use crate::runner::TokioCommandRunner;
use crate::spec::SyncSpec;

/// Client that compiles and runs NetStorage rsync commands.
///
/// Generic over the process-execution port so tests can substitute a
/// fake runner. Every operation builds fresh command state, so
/// concurrent calls on one client are safe.
pub struct RsyncClient<R> {
    config: NetStorageConfig,
    runner: R,
}

/// The production client wiring: tokio process runner.
pub type DefaultRsyncClient = RsyncClient<TokioCommandRunner>;

impl DefaultRsyncClient {
    /// Build the production client from a configuration.
    pub fn from_config(config: NetStorageConfig) -> SyncResult<Self> {
        Self::new(config, TokioCommandRunner)
    }
}

impl<R: CommandRunner> RsyncClient<R> {
    /// Create a client, validating the configuration.
    ///
    /// A host that is not the NetStorage service gets no daemon-side
    /// path resolution, so its root directory must be absolute; a
    /// relative path would resolve unpredictably on the remote shell.
    pub fn new(config: NetStorageConfig, runner: R) -> SyncResult<Self> {
        if !config.host.contains(command::NETSTORAGE_HOST_MARKER)
            && !config.root_directory.starts_with('/')
        {
            return Err(SyncError::RootNotAbsolute {
                path: config.root_directory,
            });
        }
        Ok(Self { config, runner })
    }

    /// Compile the upload command for the given files without running it.
    pub fn compile_upload_command<S: AsRef<str>>(
        &self,
        source_directory: &str,
        destination_subpath: &str,
        files: &[S],
        dry_run: bool,
    ) -> SyncResult<String> {
        let mut spec = SyncSpec::new(source_directory, destination_subpath, files);
        if dry_run {
            spec = spec.with_dry_run();
        }
        self.compile_command(&spec)
    }

    /// Compile the command for an arbitrary sync spec.
    pub fn compile_command(&self, spec: &SyncSpec) -> SyncResult<String> {
        command::compile(&self.config, spec)
    }

    /// Upload the listed files: compile, run, classify.
    ///
    /// Returns the process exit code (always 0 on success).
    pub async fn upload<S: AsRef<str>>(
        &self,
        source_directory: &str,
        destination_subpath: &str,
        files: &[S],
        dry_run: bool,
    ) -> SyncResult<i32> {
        let mut spec = SyncSpec::new(source_directory, destination_subpath, files);
        if dry_run {
            spec = spec.with_dry_run();
        }
        self.run(&spec).await
    }

    /// Like [`Self::upload`], but also deletes destination files missing
    /// from the source.
    pub async fn mirror<S: AsRef<str>>(
        &self,
        source_directory: &str,
        destination_subpath: &str,
        files: &[S],
        dry_run: bool,
    ) -> SyncResult<i32> {
        let mut spec =
            SyncSpec::new(source_directory, destination_subpath, files).with_delete();
        if dry_run {
            spec = spec.with_dry_run();
        }
        self.run(&spec).await
    }

    /// Run an arbitrary sync spec.
    pub async fn run(&self, spec: &SyncSpec) -> SyncResult<i32> {
        self.execute(spec, None).await
    }

    /// Run a sync spec, racing it against a cancellation token. The
    /// child process is torn down on cancellation.
    pub async fn run_with_cancel(
        &self,
        spec: &SyncSpec,
        cancel: &CancellationToken,
    ) -> SyncResult<i32> {
        self.execute(spec, Some(cancel)).await
    }

    async fn execute(
        &self,
        spec: &SyncSpec,
        cancel: Option<&CancellationToken>,
    ) -> SyncResult<i32> {
        let command_line = self.compile_command(spec)?;
        let env = self.invocation_env();

        let result = match cancel {
            Some(token) => tokio::select! {
                result = self.runner.run(&command_line, &env) => result?,
                () = token.cancelled() => return Err(SyncError::Cancelled),
            },
            None => self.runner.run(&command_line, &env).await?,
        };

        if spec.dry_run {
            // dry runs exist to be inspected, so report regardless of outcome
            tracing::info!(
                command = %command_line,
                output = ?result.output_lines,
                "netstorage rsync dry run"
            );
        }

        if !result.succeeded() {
            return Err(SyncError::SyncFailed {
                exit_code: result.exit_code,
                output: result.output_lines,
            });
        }
        Ok(result.exit_code)
    }

    /// Credentials travel with each invocation instead of being written
    /// into the process-wide environment, so clients with different
    /// passwords can run concurrently without cross-talk.
    fn invocation_env(&self) -> Vec<(String, String)> {
        if self.config.password.is_empty() {
            Vec::new()
        } else {
            vec![("RSYNC_PASSWORD".to_string(), self.config.password.clone())]
        }
    }
}
