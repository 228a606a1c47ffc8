//! HTTP transport backed by reqwest.
//!
//! The transport implements the `HttpTransport` port: it sends the
//! request and hands back whatever status and body arrive. It never
//! classifies the status; that decision belongs to the client.

use async_trait::async_trait;

use edgesync_core::{HttpResponse, HttpTransport, TransportError};

use crate::config::PurgeConfig;

/// Production HTTP transport using reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport from the client configuration.
    #[must_use]
    pub fn new(config: &PurgeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .expect("failed to create HTTP client");

        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &str,
    ) -> Result<HttpResponse, TransportError> {
        let mut request = self.client.post(url).body(body.to_string());
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response =
            request
                .send()
                .await
                .map_err(|e| TransportError::RequestFailed {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| TransportError::BodyRead {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(HttpResponse { status, body })
    }
}

// ============================================================================
// Fake Transport for Testing
// ============================================================================
