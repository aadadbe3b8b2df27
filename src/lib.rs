//! usearch - An in-memory people search service with a typed HTTP client
//!
//! The dataset is loaded once at startup into an immutable [`store::RecordStore`]
//! and served through a single `GET /search` endpoint. [`client::SearchClient`]
//! is the matching typed client.

pub mod cli;
pub mod client;
pub mod observability;
pub mod query;
pub mod server;
pub mod store;
