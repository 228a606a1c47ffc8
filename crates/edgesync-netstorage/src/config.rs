//! Public configuration for the NetStorage client.

/// Configuration for a NetStorage rsync target.
///
/// `host` and `username` select the destination addressing mode: both
/// set and the host containing the NetStorage domain marker means the
/// rsync daemon syntax, both set on another host means remote-shell
/// syntax, and anything else falls back to a local-filesystem path
/// (useful for staging and local testing).
#[derive(Debug, Clone)]
pub struct NetStorageConfig {
    /// NetStorage (or staging) hostname; empty for local targets.
    pub(crate) host: String,
    /// Root directory (or CP code) on the target.
    pub(crate) root_directory: String,
    /// NetStorage username; empty for local targets.
    pub(crate) username: String,
    /// NetStorage rsync password; empty when the target needs none.
    pub(crate) password: String,
}

impl NetStorageConfig {
    /// Create a configuration for the given target.
    pub fn new(
        host: impl Into<String>,
        root_directory: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            root_directory: root_directory.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}
