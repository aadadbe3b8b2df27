//! # Search Server Errors
//!
//! Wire bodies are part of the protocol contract: malformed `limit`/`offset`
//! produce plain-text 400s, a rejected sort field produces the JSON payload
//! `{"error":"ErrorBadOrderField"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::UnknownSortField;

/// Result type for search request handling
pub type SearchResult<T> = Result<T, SearchError>;

/// Machine-readable reason emitted for a rejected sort field.
pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";

/// Search endpoint errors
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// `limit` did not parse as an integer
    #[error("invalid limit")]
    InvalidLimit,

    /// `offset` did not parse as an integer
    #[error("invalid offset")]
    InvalidOffset,

    /// Sort field outside the fixed vocabulary
    #[error("{0}")]
    BadOrderField(#[from] UnknownSortField),

    /// Missing or mismatched access token
    #[error("Bad AccessToken")]
    Unauthorized,

    /// Page could not be serialized (should not occur with well-formed data)
    #[error("internal error: {0}")]
    Internal(String),
}

impl SearchError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::InvalidLimit => StatusCode::BAD_REQUEST,
            SearchError::InvalidOffset => StatusCode::BAD_REQUEST,
            SearchError::BadOrderField(_) => StatusCode::BAD_REQUEST,
            SearchError::Unauthorized => StatusCode::UNAUTHORIZED,
            SearchError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error payload carried by sort-field rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            SearchError::BadOrderField(_) => {
                let body = ErrorBody {
                    error: ERROR_BAD_ORDER_FIELD.to_string(),
                };
                (status, Json(body)).into_response()
            }
            other => (status, other.to_string()).into_response(),
        }
    }
}
