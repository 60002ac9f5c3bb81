//! Error types for upstream client operations

use thiserror::Error;
use vfacade_core::TransportError;

/// Result type alias for upstream client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the upstream service
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl From<ClientError> for TransportError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::HttpError(e) if e.is_timeout() => TransportError::Timeout,
            ClientError::HttpError(e) if e.is_connect() => TransportError::Connection(e.to_string()),
            ClientError::HttpError(e) => TransportError::Request(e.to_string()),
        }
    }
}
