//! Responses for requests no handler accepts

use crate::error::ApiError;

/// Known path, wrong HTTP method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// No route matches the path
pub async fn no_route() -> ApiError {
    ApiError::NoRoute
}
