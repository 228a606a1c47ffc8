//! Authenticated HTTP transport port.

use async_trait::async_trait;
use thiserror::Error;

/// A raw HTTP response: status plus body text.
///
/// The transport never interprets the status. Classifying a non-201
/// answer as a rejection is the purge client's job, not the transport's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as text.
    pub body: String,
}

/// Failure to complete an HTTP exchange at all.
///
/// This covers connection-level problems only; an application-level
/// rejection arrives as a normal [`HttpResponse`].
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    #[error("request to {url} failed: {message}")]
    RequestFailed {
        /// The URL that was requested.
        url: String,
        /// Underlying error description.
        message: String,
    },

    /// A response arrived but its body could not be read.
    #[error("failed to read response body from {url}: {message}")]
    BodyRead {
        /// The URL that was requested.
        url: String,
        /// Underlying error description.
        message: String,
    },
}

/// HTTP transport for submitting signed API requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` to `url` with the given headers.
    ///
    /// Every HTTP status is returned as data; only connection-level
    /// failures produce an `Err`.
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_names_the_url() {
        let err = TransportError::RequestFailed {
            url: "https://example.com/ccu".to_string(),
            message: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/ccu"));
        assert!(msg.contains("connection refused"));
    }
}
