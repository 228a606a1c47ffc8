//! Sync specification value object.

/// One sync operation: which files move from where to where, and how.
///
/// Built fresh per call and consumed by the compile/run operations.
/// `files` is an ordered allow-list; compiling an empty list is a
/// caller error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSpec {
    /// Local directory the files live in.
    pub source_directory: String,
    /// Destination sub-path under the configured root directory.
    pub destination_subpath: String,
    /// Filenames to include, in include order.
    pub files: Vec<String>,
    /// Delete destination files missing from the source.
    pub delete: bool,
    /// Compile with `--dry-run --verbose` instead of transferring.
    pub dry_run: bool,
}

impl SyncSpec {
    /// Create a plain upload spec (no delete, no dry run).
    pub fn new<S: AsRef<str>>(
        source_directory: impl Into<String>,
        destination_subpath: impl Into<String>,
        files: &[S],
    ) -> Self {
        Self {
            source_directory: source_directory.into(),
            destination_subpath: destination_subpath.into(),
            files: files.iter().map(|f| f.as_ref().to_string()).collect(),
            delete: false,
            dry_run: false,
        }
    }

    /// Also delete destination files missing from the source.
    #[must_use]
    pub const fn with_delete(mut self) -> Self {
        self.delete = true;
        self
    }

    /// Compile in dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}
