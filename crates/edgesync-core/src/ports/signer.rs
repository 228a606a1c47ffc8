//! Request-signing port.

/// Produces the authorization header for an outgoing API request.
///
/// The purge client only needs "sign these request parts, give me a
/// header value"; the signature scheme itself (key material, timestamp
/// handling, nonces) lives entirely behind this trait.
pub trait RequestSigner: Send + Sync {
    /// Compute the authorization header value for a request.
    fn sign(&self, method: &str, host: &str, path: &str, body: &str) -> String;
}
