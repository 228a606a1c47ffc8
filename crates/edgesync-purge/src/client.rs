//! The invalidation client: request assembly, response classification,
//! and the post-acceptance propagation wait.

use std::time::Duration;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use edgesync_core::{HttpTransport, Network, PurgeReceipt, RequestSigner};

use crate::config::PurgeConfig;
use crate::error::{PurgeError, PurgeResult};
use crate::http::ReqwestTransport;
use crate::signer::EdgeGridSigner;

/// Path prefix of the Fast Purge invalidation endpoint.
const PURGE_API_PREFIX: &str = "/ccu/v3/invalidate";

/// The only status the purge API uses to accept a request.
const ACCEPTED: u16 = 201;

/// Diagnostic fields of a rejection body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Rejection {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    http_status: Option<u16>,
}

/// Client for the Fast Purge invalidation API.
///
/// Generic over the transport and signer ports so tests can substitute
/// fakes. Holds no mutable state: every call builds a fresh request, so
/// concurrent invocations are safe.
pub struct InvalidationClient<T, S> {
    host: String,
    transport: T,
    signer: S,
}

/// The production client wiring: reqwest transport + EdgeGrid signer.
pub type DefaultInvalidationClient = InvalidationClient<ReqwestTransport, EdgeGridSigner>;

impl DefaultInvalidationClient {
    /// Build the production client from a configuration.
    #[must_use]
    pub fn from_config(config: &PurgeConfig) -> Self {
        let transport = ReqwestTransport::new(config);
        let signer = EdgeGridSigner::new(
            config.client_token.clone(),
            config.client_secret.clone(),
            config.access_token.clone(),
        );
        Self::new(config.host.clone(), transport, signer)
    }
}

impl<T: HttpTransport, S: RequestSigner> InvalidationClient<T, S> {
    /// Create a client against `host` with the given collaborators.
    pub fn new(host: impl Into<String>, transport: T, signer: S) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            transport,
            signer,
        }
    }

    /// Purge `urls` on `network` and wait out the CDN's propagation
    /// estimate before returning.
    ///
    /// The wait is a deliberate synchronous block (the API offers no
    /// polling endpoint cheaper than the wait itself). Callers that need
    /// non-blocking behavior should run this on a worker, or use
    /// [`Self::invalidate_with_cancel`] / [`Self::submit`].
    pub async fn invalidate(
        &self,
        urls: &[String],
        network: Network,
    ) -> PurgeResult<PurgeReceipt> {
        let receipt = self.submit(urls, network).await?;
        Self::wait_for_propagation(&receipt).await;
        Ok(receipt)
    }

    /// Like [`Self::invalidate`], but the propagation wait races the
    /// cancellation token. Cancellation yields [`PurgeError::Cancelled`];
    /// the purge itself has already been accepted by then.
    pub async fn invalidate_with_cancel(
        &self,
        urls: &[String],
        network: Network,
        cancel: &CancellationToken,
    ) -> PurgeResult<PurgeReceipt> {
        let receipt = self.submit(urls, network).await?;
        tokio::select! {
            () = Self::wait_for_propagation(&receipt) => Ok(receipt),
            () = cancel.cancelled() => Err(PurgeError::Cancelled),
        }
    }

    /// Submit the purge and classify the response, without waiting for
    /// propagation.
    pub async fn submit(&self, urls: &[String], network: Network) -> PurgeResult<PurgeReceipt> {
        let path = format!("{PURGE_API_PREFIX}/url/{network}");
        // serde_json leaves forward slashes unescaped, which the purge
        // API requires for its literal-URL objects.
        let body = serde_json::json!({ "objects": urls }).to_string();

        let authorization = self.signer.sign("POST", &self.host, &path, &body);
        let headers = vec![
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), authorization),
        ];

        let url = format!("https://{}{path}", self.host);
        tracing::debug!(url = %url, urls = urls.len(), network = %network, "submitting purge");

        let response = self.transport.post(&url, &headers, &body).await?;

        if response.status != ACCEPTED {
            let rejection: Rejection = serde_json::from_str(&response.body).unwrap_or_default();
            return Err(PurgeError::Rejected {
                http_status: rejection.http_status.unwrap_or(response.status),
                title: rejection
                    .title
                    .unwrap_or_else(|| "Unknown error".to_string()),
                detail: rejection.detail.unwrap_or_default(),
            });
        }

        let mut receipt: PurgeReceipt = serde_json::from_str(&response.body).map_err(|e| {
            PurgeError::InvalidResponse {
                message: e.to_string(),
            }
        })?;
        if receipt.http_status == 0 {
            // Body omitted its status echo; the wire status is authoritative.
            receipt.http_status = response.status;
        }
        Ok(receipt)
    }

    /// Sleep for the CDN's own completion estimate.
    async fn wait_for_propagation(receipt: &PurgeReceipt) {
        tracing::info!(
            purge_id = %receipt.purge_id,
            estimated_seconds = receipt.estimated_seconds,
            "purge accepted; waiting for propagation"
        );
        tokio::time::sleep(Duration::from_secs(receipt.estimated_seconds)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeTransport;

    /// Signer stub producing a recognizable header.
    struct StaticSigner;

    impl RequestSigner for StaticSigner {
        fn sign(&self, method: &str, _host: &str, path: &str, _body: &str) -> String {
            format!("signed {method} {path}")
        }
    }

    const ACCEPTED_BODY: &str = r#"{
        "httpStatus": 201,
        "estimatedSeconds": 5,
        "purgeId": "e535071c-26b2-11e7-94d7-276f2f54d938",
        "supportId": "17PY1493793409098427-349562624",
        "detail": "Request accepted"
    }"#;

    fn client(fake: FakeTransport) -> InvalidationClient<FakeTransport, StaticSigner> {
        InvalidationClient::new("akaa-host.luna.akamaiapis.net", fake, StaticSigner)
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_purge_waits_out_the_estimate() {
        let fake = FakeTransport::new(201, ACCEPTED_BODY);
        let client = client(fake.clone());
        let urls = vec!["https://example.com/a".to_string()];

        let started = tokio::time::Instant::now();
        let receipt = client.invalidate(&urls, Network::Production).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(5));
        assert_eq!(receipt.estimated_seconds, 5);
        assert_eq!(receipt.purge_id, "e535071c-26b2-11e7-94d7-276f2f54d938");
        assert_eq!(receipt.http_status, 201);
    }

    #[tokio::test(start_paused = true)]
    async fn submit_does_not_wait() {
        let fake = FakeTransport::new(201, ACCEPTED_BODY);
        let client = client(fake);

        let started = tokio::time::Instant::now();
        let receipt = client
            .submit(&["https://example.com/a".to_string()], Network::Production)
            .await
            .unwrap();

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(receipt.estimated_seconds, 5);
    }

    #[tokio::test]
    async fn request_is_built_against_the_network_path() {
        let fake = FakeTransport::new(201, ACCEPTED_BODY);
        let client = client(fake.clone());

        client
            .submit(&["https://example.com/a".to_string()], Network::Staging)
            .await
            .unwrap();

        let seen = fake.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].url,
            "https://akaa-host.luna.akamaiapis.net/ccu/v3/invalidate/url/staging"
        );
    }

    #[tokio::test]
    async fn body_preserves_order_and_leaves_slashes_unescaped() {
        let fake = FakeTransport::new(201, ACCEPTED_BODY);
        let client = client(fake.clone());
        let urls = vec![
            "https://example.com/a".to_string(),
            "https://example.com/b?x=1".to_string(),
        ];

        client.submit(&urls, Network::Production).await.unwrap();

        assert_eq!(
            fake.requests()[0].body,
            r#"{"objects":["https://example.com/a","https://example.com/b?x=1"]}"#
        );
    }

    #[tokio::test]
    async fn headers_carry_content_type_and_signature() {
        let fake = FakeTransport::new(201, ACCEPTED_BODY);
        let client = client(fake.clone());

        client.submit(&[], Network::Production).await.unwrap();

        let headers = fake.requests()[0].headers.clone();
        assert!(headers.contains(&(
            "Content-Type".to_string(),
            "application/json".to_string()
        )));
        assert!(headers.contains(&(
            "Authorization".to_string(),
            "signed POST /ccu/v3/invalidate/url/production".to_string()
        )));
    }

    #[tokio::test]
    async fn non_201_is_a_rejection_with_cdn_diagnostics() {
        let fake = FakeTransport::new(
            400,
            r#"{"title":"Bad Request","detail":"objects required","httpStatus":400}"#,
        );
        let client = client(fake);

        let err = client
            .submit(&["https://example.com/a".to_string()], Network::Production)
            .await
            .unwrap_err();

        match err {
            PurgeError::Rejected {
                http_status,
                title,
                detail,
            } => {
                assert_eq!(http_status, 400);
                assert_eq!(title, "Bad Request");
                assert_eq!(detail, "objects required");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_rejection_body_still_reports_the_status() {
        let fake = FakeTransport::new(502, "<html>bad gateway</html>");
        let client = client(fake);

        let err = client.submit(&[], Network::Production).await.unwrap_err();
        match err {
            PurgeError::Rejected {
                http_status, title, ..
            } => {
                assert_eq!(http_status, 502);
                assert_eq!(title, "Unknown error");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_success_body_is_an_invalid_response() {
        let fake = FakeTransport::new(201, "not json");
        let client = client(fake);

        let err = client.submit(&[], Network::Production).await.unwrap_err();
        assert!(matches!(err, PurgeError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_unchanged() {
        let fake = FakeTransport::failing("connection refused");
        let client = client(fake);

        let err = client.submit(&[], Network::Production).await.unwrap_err();
        assert!(matches!(err, PurgeError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_interrupts_the_propagation_wait() {
        let fake = FakeTransport::new(201, ACCEPTED_BODY);
        let client = client(fake);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client
            .invalidate_with_cancel(&[], Network::Production, &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, PurgeError::Cancelled));
    }
}
