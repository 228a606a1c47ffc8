//! Error types for purge operations.

use edgesync_core::TransportError;
use thiserror::Error;

/// Result type alias for purge operations.
pub type PurgeResult<T> = Result<T, PurgeError>;

/// Errors produced by the purge client.
///
/// No variant is retried anywhere in this crate; every failure surfaces
/// to the immediate caller. The worker adapter is the one place that
/// converts these into a normalized outcome record instead.
#[derive(Debug, Error)]
pub enum PurgeError {
    /// The HTTP exchange itself failed (connection-level).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The CDN answered with something other than 201.
    ///
    /// Carries the CDN's own diagnostic fields verbatim.
    #[error("purge rejected ({http_status}): {title} - {detail}")]
    Rejected {
        /// Status reported by the CDN.
        http_status: u16,
        /// The CDN's error title.
        title: String,
        /// The CDN's error detail.
        detail: String,
    },

    /// A 201 arrived but its body could not be decoded.
    #[error("invalid response from the purge API: {message}")]
    InvalidResponse {
        /// Description of what was invalid.
        message: String,
    },

    /// A queue-job payload could not be decoded into a purge request.
    #[error("invalid job payload: {message}")]
    Payload {
        /// Description of what was invalid.
        message: String,
    },

    /// The propagation wait was cancelled before it elapsed.
    #[error("purge propagation wait cancelled")]
    Cancelled,
}

impl PurgeError {
    /// Short classification tag, used in job-outcome context records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Rejected { .. } => "rejected",
            Self::InvalidResponse { .. } => "invalid_response",
            Self::Payload { .. } => "payload",
            Self::Cancelled => "cancelled",
        }
    }
}
