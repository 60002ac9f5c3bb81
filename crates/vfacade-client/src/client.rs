//! Upstream HTTP client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;
use vfacade_core::{TransportError, UpstreamReply, UpstreamRequest, UpstreamTransport};

use crate::error::Result;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the upstream vehicle telemetry/command service
///
/// Every call is a single JSON POST; nothing is retried or cached.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    /// Create a client with the default timeouts
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a client with custom timeouts
    pub fn with_config(timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self { client })
    }

    /// POST `body` as JSON to `endpoint`.
    ///
    /// The response body is only parsed when the transport status is 200;
    /// any other status is already a failure and its body is discarded.
    #[instrument(skip(self, body), fields(endpoint = %endpoint))]
    pub async fn post(&self, endpoint: &Url, body: &UpstreamRequest) -> Result<UpstreamReply> {
        let response = self
            .client
            .post(endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        debug!(status = status.as_u16(), "Upstream responded");

        if status != StatusCode::OK {
            return Ok(UpstreamReply::new(status.as_u16(), None));
        }

        let bytes = response.bytes().await?;
        let body = match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(error = %e, len = bytes.len(), "Upstream body is not JSON");
                None
            }
        };

        Ok(UpstreamReply::new(status.as_u16(), body))
    }
}

#[async_trait]
impl UpstreamTransport for UpstreamClient {
    async fn post_json(
        &self,
        endpoint: &Url,
        body: &UpstreamRequest,
    ) -> std::result::Result<UpstreamReply, TransportError> {
        self.post(endpoint, body).await.map_err(TransportError::from)
    }
}
