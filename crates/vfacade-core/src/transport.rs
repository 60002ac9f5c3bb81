//! UpstreamTransport trait - the seam between the dispatcher and HTTP

use async_trait::async_trait;
use url::Url;

use crate::error::TransportError;
use crate::models::UpstreamRequest;

/// What came back from one upstream round trip
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    /// Transport-level HTTP status code
    pub status: u16,
    /// Parsed JSON body, `None` if the body was empty or not JSON
    pub body: Option<serde_json::Value>,
}

impl UpstreamReply {
    pub fn new(status: u16, body: Option<serde_json::Value>) -> Self {
        Self { status, body }
    }

    /// Transport status is 200 and the body's own `status` field is `"200"`
    pub fn is_success(&self) -> bool {
        self.status == 200
            && self
                .body
                .as_ref()
                .and_then(|body| body.get("status"))
                .and_then(|status| status.as_str())
                == Some("200")
    }
}

/// Sends one JSON POST to the upstream service
///
/// Implementations must issue exactly one request per call and must not
/// retry or cache.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn post_json(
        &self,
        endpoint: &Url,
        body: &UpstreamRequest,
    ) -> Result<UpstreamReply, TransportError>;
}
