//! Public configuration for the purge client.

use std::time::Duration;

/// Configuration for the purge client.
///
/// Carries the API host and the EdgeGrid credential triple, plus HTTP
/// knobs. Use the builder methods to customize.
///
/// # Example
///
/// ```
/// use edgesync_purge::PurgeConfig;
/// use std::time::Duration;
///
/// let config = PurgeConfig::new(
///     "akaa-xxxx.luna.akamaiapis.net",
///     "client-token",
///     "client-secret",
///     "access-token",
/// )
/// .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct PurgeConfig {
    /// API hostname, without scheme.
    pub(crate) host: String,
    /// EdgeGrid client token.
    pub(crate) client_token: String,
    /// EdgeGrid client secret.
    pub(crate) client_secret: String,
    /// EdgeGrid access token.
    pub(crate) access_token: String,
    /// Request timeout.
    pub(crate) timeout: Duration,
    /// User agent string for HTTP requests.
    pub(crate) user_agent: String,
}

impl PurgeConfig {
    /// Create a configuration with the required host and credentials.
    pub fn new(
        host: impl Into<String>,
        client_token: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            client_token: client_token.into(),
            client_secret: client_secret.into(),
            access_token: access_token.into(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("edgesync-purge/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds. This bounds the HTTP exchange only, not
    /// the propagation wait that follows an accepted purge.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
