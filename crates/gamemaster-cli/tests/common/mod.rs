//! Shared helpers for end-to-end client tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use gamemaster_http::http_transport::HttpTransport;
use gamemaster_session::application::dispatcher::TurnDispatcher;
use gamemaster_session::domain::agent::AgentVariant;
use gamemaster_session::domain::aggregates::Session;
use gamemaster_test_support::fixed_clock;
use serde_json::{Value, json};

/// Request bodies received by the mock orchestrator.
pub type Received = Arc<Mutex<Vec<Value>>>;

/// Answers like a real orchestrator: the reply shape depends on `agent`.
async fn game_master(
    State(received): State<Received>,
    Json(body): Json<Value>,
) -> Json<Value> {
    received.lock().unwrap().push(body.clone());
    let reply = match body["agent"].as_str() {
        Some("storyteller") => {
            let action = body["action"].as_str().unwrap_or_default();
            json!({ "story": format!("Le MJ raconte : {action}") })
        }
        Some("rules-keeper") => json!({ "rule": "Un jet de Dextérité DD 12 suffit." }),
        Some("thrower") => json!({
            "roll": "[5, 1] + 3",
            "expression": body["expression"],
            "result": 9
        }),
        _ => json!({ "unexpected": body }),
    };
    Json(reply)
}

/// A mock orchestrator that replies per agent and records every request.
pub fn game_master_router(received: Received) -> Router {
    Router::new()
        .route("/orchestrate", post(game_master))
        .with_state(received)
}

/// A mock orchestrator that always answers 503.
pub fn unavailable_router() -> Router {
    Router::new().route(
        "/orchestrate",
        post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    )
}

/// Serve `router` on an ephemeral port and return the orchestrator URL.
pub async fn spawn_orchestrator(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/orchestrate")
}

/// Build a dispatcher wired to `url` through the real HTTP transport.
pub fn dispatcher_for(url: String, agent: AgentVariant) -> TurnDispatcher {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let transport = HttpTransport::with_client(client, url);
    TurnDispatcher::new(
        Session::new("partie-42", agent),
        Arc::new(transport),
        Arc::new(fixed_clock()),
    )
}
