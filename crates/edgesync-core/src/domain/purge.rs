//! Purge request and receipt value objects.

use serde::{Deserialize, Serialize};

use super::network::Network;

/// A batch of URLs to invalidate on a given network.
///
/// This is also the shape of a queue-job payload for the invalidation
/// callback, which is why it derives `Deserialize`. The URL order is
/// preserved into the wire payload. An empty list is accepted here;
/// avoiding no-op calls is the producer's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeRequest {
    /// URLs to purge, in submission order.
    pub urls: Vec<String>,
    /// Target network. Absent in a payload means production, matching
    /// the purge operation's documented default.
    #[serde(default)]
    pub network: Network,
}

impl PurgeRequest {
    /// Create a purge request for the given URLs and network.
    #[must_use]
    pub const fn new(urls: Vec<String>, network: Network) -> Self {
        Self { urls, network }
    }
}

/// The CDN's answer to an accepted purge request.
///
/// Populated exclusively from the `201` response body, decided once at
/// the transport boundary. Read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeReceipt {
    /// HTTP status of the accepted request (always 201 in practice).
    #[serde(default)]
    pub http_status: u16,
    /// The CDN's estimate of how long propagation takes, in seconds.
    pub estimated_seconds: u64,
    /// Opaque identifier for the purge operation.
    pub purge_id: String,
    /// Support reference for the request, when the CDN provides one.
    #[serde(default)]
    pub support_id: Option<String>,
    /// Human-readable summary, e.g. "Request accepted".
    #[serde(default)]
    pub detail: Option<String>,
    /// Error title; only populated on rejection payloads.
    #[serde(default)]
    pub title: Option<String>,
}
