//! # Search Client
//!
//! Typed client for the `/search` endpoint. One dispatch per call: local
//! pre-validation, a single GET with a hard timeout, and classification of
//! the outcome into [`SearchResponse`] or exactly one [`ClientError`].

mod errors;

pub use errors::{ClientError, ClientResult};

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::server::{ErrorBody, ERROR_BAD_ORDER_FIELD};
use crate::store::Record;

/// Page ceiling known by convention; larger requests are clamped to it.
pub const MAX_PAGE_LIMIT: i64 = 25;

/// Default dispatch timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// A search request as the caller sees it, before wire encoding.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    /// Case-sensitive substring to match.
    pub query: String,
    /// One of `""`, `"Name"`, `"Id"`, `"Age"`; anything else is rejected by
    /// the server.
    pub order_field: String,
    /// `-1` ascending, `0` no sort, anything else descending.
    pub order_by: i64,
}

/// One decoded result page.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResponse {
    pub users: Vec<Record>,
    /// True when the server had at least one more matching record past this
    /// page.
    pub next_page: bool,
}

/// Client for the search endpoint.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.access_token.is_some())
            .finish()
    }
}

impl SearchClient {
    /// Create a client with the default timeout.
    ///
    /// `base_url` is the server root (e.g. `http://localhost:8080`);
    /// trailing slashes are stripped.
    pub fn new(base_url: &str, access_token: Option<String>) -> Self {
        Self::with_timeout(base_url, access_token, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit dispatch timeout.
    pub fn with_timeout(base_url: &str, access_token: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token,
        }
    }

    /// Dispatch one search and classify the outcome.
    pub async fn find_users(&self, request: &SearchRequest) -> ClientResult<SearchResponse> {
        if request.limit <= 0 {
            return Err(ClientError::InvalidLimit);
        }
        if request.offset < 0 {
            return Err(ClientError::InvalidOffset);
        }

        // Clamp to the page ceiling and ask for one extra record so the
        // caller can tell whether more results exist.
        let effective = request.limit.min(MAX_PAGE_LIMIT);
        let wire_limit = effective + 1;

        let params = [
            ("limit", wire_limit.to_string()),
            ("offset", request.offset.to_string()),
            ("order_by", request.order_by.to_string()),
            ("order_field", request.order_field.clone()),
            ("query", request.query.clone()),
        ];

        let url = format!("{}/search", self.base_url);
        let mut req = self.client.get(&url).query(&params);
        if let Some(ref token) = self.access_token {
            req = req.header("AccessToken", token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| Self::map_transport_error(e, &params))?;

        match resp.status() {
            StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
            StatusCode::INTERNAL_SERVER_ERROR => Err(ClientError::ServerFatal),
            StatusCode::BAD_REQUEST => {
                Err(Self::classify_bad_request(resp, &request.order_field).await)
            }
            _ => {
                let users: Vec<Record> = resp
                    .json()
                    .await
                    .map_err(|e| ClientError::ResultUnpack(e.to_string()))?;
                Ok(window(users, effective))
            }
        }
    }

    /// Map a reqwest error (timeout vs everything else) to a `ClientError`.
    fn map_transport_error(e: reqwest::Error, params: &[(&str, String)]) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(encode_params(params))
        } else {
            ClientError::Unknown(e.to_string())
        }
    }

    /// Classify a 400 by its machine-readable reason.
    async fn classify_bad_request(resp: reqwest::Response, order_field: &str) -> ClientError {
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => return ClientError::Unknown(e.to_string()),
        };

        match serde_json::from_str::<ErrorBody>(&body) {
            Err(e) => ClientError::MalformedErrorBody(e.to_string()),
            Ok(parsed) if parsed.error == ERROR_BAD_ORDER_FIELD => {
                ClientError::BadOrderField(order_field.to_string())
            }
            Ok(parsed) => ClientError::UnknownBadRequest(parsed.error),
        }
    }
}

/// Truncate the one-extra-record wire page back to the caller's limit and
/// derive the `next_page` flag.
fn window(mut users: Vec<Record>, effective: i64) -> SearchResponse {
    let effective = effective.max(0) as usize;
    let next_page = users.len() > effective;
    users.truncate(effective);
    SearchResponse { users, next_page }
}

/// Key-sorted `k=v&k=v` rendering of the wire parameters, for diagnostics.
fn encode_params(params: &[(&str, String)]) -> String {
    let mut pairs: Vec<_> = params.iter().collect();
    pairs.sort_by_key(|(k, _)| *k);
    pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}
