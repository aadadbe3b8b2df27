//! # Search Routes
//!
//! Router and handler for `GET /search`. The handler holds no state of its
//! own; it reads from an injected, never-mutated record store.

use std::collections::HashMap;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::{Logger, Severity};
use crate::query::evaluate;
use crate::store::{Record, RecordStore};

use super::config::ServerConfig;
use super::errors::{SearchError, SearchResult};
use super::params::decode_params;

/// Shared handler state: the record store plus the optional access token.
pub struct SearchState {
    store: Arc<RecordStore>,
    access_token: Option<String>,
}

impl SearchState {
    pub fn new(store: RecordStore, access_token: Option<String>) -> Self {
        Self {
            store: Arc::new(store),
            access_token,
        }
    }
}

type ServerState = Arc<SearchState>;

/// Build the `/search` router over the given state.
pub fn search_router(state: SearchState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(search_handler))
        .with_state(Arc::new(state))
        .layer(cors)
}

/// Reject the request unless the configured access token matches.
fn authorize(state: &SearchState, headers: &HeaderMap) -> SearchResult<()> {
    let Some(expected) = state.access_token.as_deref() else {
        return Ok(());
    };
    let presented = headers
        .get("AccessToken")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if presented == expected {
        Ok(())
    } else {
        Err(SearchError::Unauthorized)
    }
}

/// Search handler: decode, evaluate, serialize.
async fn search_handler(
    State(state): State<ServerState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> SearchResult<Json<Vec<Record>>> {
    authorize(&state, &headers)?;
    let plan = decode_params(&params)?;

    let page = evaluate(state.store.records(), &plan);
    Logger::log(
        Severity::Info,
        "search_served",
        &[
            ("query", plan.query.as_str()),
            ("returned", &page.len().to_string()),
        ],
    );
    Ok(Json(page))
}

/// Search HTTP server: configuration plus the assembled router.
pub struct SearchServer {
    config: ServerConfig,
    router: Router,
}

impl SearchServer {
    /// Create a server over a loaded record store.
    pub fn new(store: RecordStore, config: ServerConfig) -> Self {
        let state = SearchState::new(store, config.access_token.clone());
        let router = search_router(state);
        Self { config, router }
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("bad bind address: {e}")))?;

        let listener = TcpListener::bind(addr).await?;
        Logger::log(
            Severity::Info,
            "server_started",
            &[("addr", &addr.to_string()), ("endpoint", "/search")],
        );
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}
