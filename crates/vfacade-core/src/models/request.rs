//! Upstream request body

use serde::{Deserialize, Serialize};

/// Response encoding requested from upstream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseType {
    #[default]
    #[serde(rename = "JSON")]
    Json,
}

/// Body POSTed to an upstream endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamRequest {
    /// Vehicle identifier, as text
    pub id: String,
    #[serde(rename = "responseType")]
    pub response_type: ResponseType,
    /// Upstream command name (engine only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub command: Option<String>,
}
