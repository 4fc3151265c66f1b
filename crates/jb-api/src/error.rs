//! API error handling
//!
//! All failures leave this layer in the uniform envelope
//! `{success: false, message, error?}`. Store failures are logged with full
//! detail where they are classified; the envelope only ever carries a short
//! classification, never raw driver text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jb_db::StoreError;
use serde::Serialize;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    /// The posting does not exist. An expected outcome, not a failure.
    NotFound,
    /// The identifier is not in the store's id format.
    InvalidId,
    /// A store operation failed. `operation` selects the caller-facing
    /// message, `kind` the classification.
    Store {
        operation: &'static str,
        kind: &'static str,
    },
}

impl ApiError {
    pub fn not_found() -> Self {
        ApiError::NotFound
    }

    pub fn invalid_id() -> Self {
        ApiError::InvalidId
    }

    /// Classify a store failure for the given operation, logging the
    /// underlying error here so no caller has to.
    pub fn store(operation: &'static str, err: StoreError) -> Self {
        tracing::error!(operation, error = %err, "store operation failed");
        let kind = match err {
            StoreError::Unavailable(_) => "store unavailable",
            StoreError::Query(_) | StoreError::Decode(_) => "query error",
        };
        ApiError::Store { operation, kind }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::NotFound => FailureBody {
                success: false,
                message: "Job not found".to_string(),
                error: None,
            },
            ApiError::InvalidId => FailureBody {
                success: false,
                message: "Invalid job id".to_string(),
                error: Some("invalid identifier"),
            },
            ApiError::Store { operation, kind } => FailureBody {
                success: false,
                message: format!("Failed to {}", operation),
                error: Some(kind),
            },
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
