//! Integration tests for `HttpTransport` against a mock orchestrator.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use gamemaster_core::error::TransportError;
use gamemaster_core::transport::OrchestratorTransport;
use gamemaster_http::http_transport::HttpTransport;
use serde_json::{Value, json};

/// Requests seen by the mock orchestrator: content type and JSON body.
type Captured = Arc<Mutex<Vec<(String, Value)>>>;

/// Build a transport that talks to the loopback mock directly, bypassing any
/// proxy configured in the environment.
fn loopback_transport(url: String, timeout: Option<Duration>) -> HttpTransport {
    let mut builder = reqwest::Client::builder().no_proxy();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    HttpTransport::with_client(builder.build().unwrap(), url)
}

/// Serve `router` on an ephemeral port and return the orchestrator URL.
async fn spawn_orchestrator(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/orchestrate")
}

async fn record_and_roll(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    captured.lock().unwrap().push((content_type, body));
    Json(json!({ "roll": "[4, 2] + 3", "expression": "2d6+3", "result": 9 }))
}

#[tokio::test]
async fn test_post_sends_json_and_returns_body() {
    // Arrange
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route("/orchestrate", post(record_and_roll))
        .with_state(Arc::clone(&captured));
    let url = spawn_orchestrator(router).await;
    let transport = loopback_transport(url, None);
    let payload = json!({ "agent": "thrower", "sessionId": "partie-42", "expression": "2d6+3" });

    // Act
    let response = transport.post(&payload).await.unwrap();

    // Assert
    assert_eq!(response["result"], 9);
    assert_eq!(response["expression"], "2d6+3");

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].0, "application/json");
    assert_eq!(captured[0].1, payload);
}

#[tokio::test]
async fn test_post_returns_unknown_shapes_untouched() {
    // Arrange
    let router = Router::new().route(
        "/orchestrate",
        post(|| async { Json(json!([{ "npc": "Gobelin" }])) }),
    );
    let url = spawn_orchestrator(router).await;
    let transport = loopback_transport(url, None);

    // Act
    let response = transport.post(&json!({})).await.unwrap();

    // Assert
    assert_eq!(response, json!([{ "npc": "Gobelin" }]));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    // Arrange
    let router = Router::new().route(
        "/orchestrate",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "story": "should not be read" })),
            )
        }),
    );
    let url = spawn_orchestrator(router).await;
    let transport = loopback_transport(url, None);

    // Act
    let result = transport.post(&json!({ "agent": "storyteller" })).await;

    // Assert
    assert!(matches!(result, Err(TransportError::Status(500))));
}

#[tokio::test]
async fn test_non_json_body_is_a_decode_error() {
    // Arrange
    let router = Router::new().route("/orchestrate", post(|| async { "le serveur dort" }));
    let url = spawn_orchestrator(router).await;
    let transport = loopback_transport(url, None);

    // Act
    let result = transport.post(&json!({ "agent": "storyteller" })).await;

    // Assert
    assert!(matches!(result, Err(TransportError::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_orchestrator_is_a_request_error() {
    // Arrange — bind then release a port so nothing listens on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let transport = loopback_transport(format!("http://{addr}/orchestrate"), None);

    // Act
    let result = transport.post(&json!({ "agent": "storyteller" })).await;

    // Assert
    assert!(matches!(result, Err(TransportError::Request(_))));
}

#[tokio::test]
async fn test_slow_orchestrator_times_out_when_configured() {
    // Arrange
    let router = Router::new().route(
        "/orchestrate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "story": "trop tard" }))
        }),
    );
    let url = spawn_orchestrator(router).await;
    let transport = loopback_transport(url, Some(Duration::from_millis(50)));

    // Act
    let result = transport.post(&json!({ "agent": "storyteller" })).await;

    // Assert
    assert!(matches!(result, Err(TransportError::Timeout)));
}

#[test]
fn test_new_keeps_endpoint_verbatim() {
    let transport = HttpTransport::new("http://orchestrator.local/run", None).unwrap();

    assert_eq!(transport.endpoint(), "http://orchestrator.local/run");
}
