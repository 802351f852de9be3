//! Error types for the bookstore service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the bookstore service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A field could not be interpreted (bad price, quantity or amount)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The request body was not the JSON shape the endpoint expects
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

// == Rejection Conversion ==
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
        };

        tracing::warn!(status = status.as_u16(), error = %self, "Rejecting request");

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the bookstore service.
pub type Result<T> = std::result::Result<T, ApiError>;
