//! # Search Server
//!
//! Axum-based HTTP server exposing the `/search` endpoint over an injected,
//! read-only [`RecordStore`](crate::store::RecordStore).

mod config;
mod errors;
mod params;
mod routes;

pub use config::ServerConfig;
pub use errors::{ErrorBody, SearchError, SearchResult, ERROR_BAD_ORDER_FIELD};
pub use params::decode_params;
pub use routes::{search_router, SearchServer, SearchState};
