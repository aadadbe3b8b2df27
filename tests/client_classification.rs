//! Client outcome classification tests
//!
//! Each test spawns a bespoke route reproducing one server failure mode and
//! asserts the client maps it to exactly the right error kind.

use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use usearch::client::{ClientError, SearchClient, SearchRequest};

/// Spawn an arbitrary router; returns the base URL.
async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn any_request() -> SearchRequest {
    SearchRequest {
        limit: 5,
        offset: 0,
        query: "x".to_string(),
        order_field: String::new(),
        order_by: 0,
    }
}

#[tokio::test]
async fn test_server_fatal() {
    let router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_router(router).await;

    let err = SearchClient::new(&base, None)
        .find_users(&any_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::ServerFatal));
    assert_eq!(err.to_string(), "SearchServer fatal error");
}

#[tokio::test]
async fn test_unauthorized() {
    let router = Router::new().route("/search", get(|| async { StatusCode::UNAUTHORIZED }));
    let base = spawn_router(router).await;

    let err = SearchClient::new(&base, None)
        .find_users(&any_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    assert_eq!(err.to_string(), "Bad AccessToken");
}

#[tokio::test]
async fn test_timeout_is_hard_boundary() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "[]"
        }),
    );
    let base = spawn_router(router).await;

    let client = SearchClient::with_timeout(&base, None, Duration::from_millis(100));
    let err = client.find_users(&any_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Timeout(_)));
    assert!(err.to_string().contains("timeout"));
    assert!(err.to_string().contains("limit=6"));
}

#[tokio::test]
async fn test_connection_refused_is_unknown() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SearchClient::new(&format!("http://{addr}"), None);
    let err = client.find_users(&any_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Unknown(_)));
    assert!(err.to_string().contains("unknown error"));
}

#[tokio::test]
async fn test_bad_request_with_junk_body() {
    let router = Router::new().route(
        "/search",
        get(|| async { (StatusCode::BAD_REQUEST, "not json at all") }),
    );
    let base = spawn_router(router).await;

    let err = SearchClient::new(&base, None)
        .find_users(&any_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::MalformedErrorBody(_)));
    assert!(err.to_string().contains("cant unpack error json"));
}

#[tokio::test]
async fn test_bad_request_with_unrecognized_reason() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "ErrorAboutFieldLocked"})),
            )
        }),
    );
    let base = spawn_router(router).await;

    let err = SearchClient::new(&base, None)
        .find_users(&any_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::UnknownBadRequest(_)));
    assert!(err.to_string().contains("unknown"));
    assert!(err.to_string().contains("ErrorAboutFieldLocked"));
}

#[tokio::test]
async fn test_bad_request_with_recognized_reason() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "ErrorBadOrderField"})),
            )
        }),
    );
    let base = spawn_router(router).await;

    let mut request = any_request();
    request.order_field = "Nme".to_string();
    let err = SearchClient::new(&base, None)
        .find_users(&request)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::BadOrderField(_)));
    assert_eq!(err.to_string(), "OrderFeld Nme invalid");
}

#[tokio::test]
async fn test_ok_with_undecodable_body() {
    let router = Router::new().route(
        "/search",
        get(|| async { r#"{"definitely": "not an array"}"# }),
    );
    let base = spawn_router(router).await;

    let err = SearchClient::new(&base, None)
        .find_users(&any_request())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::ResultUnpack(_)));
    assert!(err.to_string().contains("cant unpack result json"));
}

#[tokio::test]
async fn test_ok_with_record_array_succeeds() {
    let router = Router::new().route(
        "/search",
        get(|| async {
            Json(serde_json::json!([
                {"Id": 1, "Firstname": "Alice", "Lastname": "Smith", "Age": 25, "About": "hello"}
            ]))
        }),
    );
    let base = spawn_router(router).await;

    let page = SearchClient::new(&base, None)
        .find_users(&any_request())
        .await
        .unwrap();
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].first_name, "Alice");
    assert!(!page.next_page);
}
