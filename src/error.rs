//! Error types for the shopping item API

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures that end a single request. None of them affect the store.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body is not a valid item
    #[error("{0}")]
    Decode(serde_json::Error),

    /// Request body holds no JSON value at all
    #[error("EOF")]
    EmptyBody,

    /// Path segment is not a valid UUID
    #[error("{0}")]
    InvalidId(#[from] uuid::Error),

    /// Response body could not be serialized
    #[error("{0}")]
    Encode(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Decode(_) | ApiError::EmptyBody | ApiError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}
