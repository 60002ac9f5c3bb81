//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use vfacade_core::DispatchError;

pub const NOT_FOUND_MESSAGE: &str = "Not found.";
pub const MALFORMED_MESSAGE: &str =
    "The browser (or proxy) sent a request that this server could not understand.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "The method is not allowed for the requested URL.";
pub const NO_ROUTE_MESSAGE: &str = "The requested URL was not found on the server.";
pub const EMPTY_PAYLOAD_MESSAGE: &str = "Payload must not be empty.";
pub const INTERNAL_MESSAGE: &str = "Internal server error.";

/// API error type that converts to HTTP responses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 Bad Request with a client-facing message
    BadRequest(String),
    /// 400 Bad Request - upstream had nothing usable for the vehicle
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 404 Not Found - no route matches the path
    NoRoute,
    /// 500 Internal Server Error; the detail is logged, never returned
    Internal(String),
}

impl ApiError {
    /// Request that could not be understood, with the generic message
    pub fn malformed() -> Self {
        ApiError::BadRequest(MALFORMED_MESSAGE.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::NotFound => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::NoRoute => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body: `{"message": "..."}`
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            ApiError::NoRoute => NO_ROUTE_MESSAGE.to_string(),
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "API error");
                INTERNAL_MESSAGE.to_string()
            }
        };

        if status.is_client_error() {
            tracing::debug!(status = status.as_u16(), %message, "API client error");
        }

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::NotFound => ApiError::NotFound,
            DispatchError::DataIntegrity(detail) => ApiError::Internal(detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_is_400() {
        let (status, body) = render(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "Not found."}));
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let (status, body) = render(ApiError::Internal("unknown engine status: X".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message": "Internal server error."}));
    }

    #[tokio::test]
    async fn test_method_not_allowed_and_no_route() {
        let (status, body) = render(ApiError::MethodNotAllowed).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["message"], METHOD_NOT_ALLOWED_MESSAGE);

        let (status, body) = render(ApiError::NoRoute).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], NO_ROUTE_MESSAGE);
    }

    #[test]
    fn test_from_dispatch_error() {
        assert_eq!(ApiError::from(DispatchError::NotFound), ApiError::NotFound);
        assert_eq!(
            ApiError::from(DispatchError::DataIntegrity("bad".into())),
            ApiError::Internal("bad".into())
        );
    }
}
