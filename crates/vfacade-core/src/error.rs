//! Common error types for the vehicle facade

use thiserror::Error;

/// Result type for dispatch operations
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Outcome of a failed dispatch.
///
/// Every upstream problem (unreachable, non-200, logical failure) collapses
/// into `NotFound`. Only contract violations in otherwise successful
/// responses surface as `DataIntegrity`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Upstream did not return a usable answer for this vehicle
    #[error("Not found")]
    NotFound,

    /// Upstream answered with data outside the known contract
    #[error("Data integrity fault: {0}")]
    DataIntegrity(String),
}

impl DispatchError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            DispatchError::NotFound => 400,
            DispatchError::DataIntegrity(_) => 500,
        }
    }
}

/// Errors raised while reshaping a decoded object into its public form
#[derive(Debug, Error)]
pub enum TransformError {
    /// A field the resource shape depends on is absent
    #[error("missing field: {0}")]
    MissingField(String),

    /// A field is present but has the wrong shape
    #[error("invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    /// The engine action status is not in the status table
    #[error("unknown engine status: {0}")]
    UnknownEngineStatus(String),
}

impl TransformError {
    /// Create an invalid-field error
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<TransformError> for DispatchError {
    fn from(err: TransformError) -> Self {
        DispatchError::DataIntegrity(err.to_string())
    }
}

/// Errors reported by an `UpstreamTransport`
#[derive(Debug, Error)]
pub enum TransportError {
    /// Could not reach the upstream service
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Upstream did not answer in time
    #[error("Request timed out")]
    Timeout,

    /// Request could not be built or sent
    #[error("Request failed: {0}")]
    Request(String),
}

/// Errors parsing domain values from inbound text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Resource name outside the closed set
    #[error("unknown resource: {0}")]
    UnknownResource(String),
}
