//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use placard_core::ValidationErrors;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The request's `key` query parameter is missing or not in the
    /// allow-list.
    #[error("invalid API key")]
    InvalidApiKey,

    /// The manifest query parameters failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// An unexpected internal fault. Surfaced as an opaque 500; no detail
    /// leaves the process.
    #[error("internal error")]
    Internal,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            // Fixed body, identical on every route that rejects the key.
            GatewayError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid API key"})),
            )
                .into_response(),
            GatewayError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "invalid query parameters",
                    "fields": errors.fields,
                })),
            )
                .into_response(),
            GatewayError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal error"})),
            )
                .into_response(),
        }
    }
}
