//! API error types
//!
//! Maps the error taxonomy onto HTTP status codes and the `{"success":
//! false, "error": ...}` envelope the bot's clients expect. Store failures
//! are logged in full and answered with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error taxonomy
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required request parameter is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The requested entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// Store or other internal failure; details never reach the client
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Error envelope body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            ApiError::Internal(error) => {
                tracing::error!(error = %error, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
