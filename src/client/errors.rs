//! # Client Error Classification
//!
//! Every failed dispatch maps to exactly one of these kinds. The diagnostic
//! strings (including the historical "OrderFeld" spelling) are part of the
//! compatibility contract; callers assert on substring containment.

use thiserror::Error;

/// Result type for client dispatch
pub type ClientResult<T> = Result<T, ClientError>;

/// Typed outcome classification for a search dispatch.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Local validation: limit must be positive. Never dispatched.
    #[error("limit must be > 0")]
    InvalidLimit,

    /// Local validation: offset must be non-negative. Never dispatched.
    #[error("offset must be > 0")]
    InvalidOffset,

    /// The configured timeout elapsed before a response arrived.
    #[error("timeout for {0}")]
    Timeout(String),

    /// Any other transport failure (connection refused, DNS, ...).
    #[error("unknown error {0}")]
    Unknown(String),

    /// HTTP 401.
    #[error("Bad AccessToken")]
    Unauthorized,

    /// HTTP 500.
    #[error("SearchServer fatal error")]
    ServerFatal,

    /// HTTP 400 carrying the recognized sort-field rejection.
    #[error("OrderFeld {0} invalid")]
    BadOrderField(String),

    /// HTTP 400 whose body is not valid error JSON.
    #[error("cant unpack error json: {0}")]
    MalformedErrorBody(String),

    /// HTTP 400 with an unrecognized machine-readable reason.
    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    /// HTTP 200 whose body is not a record array.
    #[error("cant unpack result json: {0}")]
    ResultUnpack(String),
}
