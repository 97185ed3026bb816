//! Shared utilities for integration testing.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// One request as seen by the mock service.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: serde_json::Value,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

/// Handle to a running mock annotate service.
pub struct MockVision {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

#[allow(dead_code)]
impl MockVision {
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("mock received no requests")
    }
}

/// Start a mock service that answers every request with `status` and `reply`.
pub async fn start_mock_vision(status: u16, reply: serde_json::Value) -> MockVision {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let state = MockState {
        status: StatusCode::from_u16(status).unwrap(),
        reply,
        seen: seen.clone(),
    };
    let app = Router::new().fallback(handle).with_state(state);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockVision { addr, seen }
}

async fn handle(
    State(state): State<MockState>,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let recorded = Recorded {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
    };
    state.seen.lock().unwrap().push(recorded);

    (state.status, Json(state.reply.clone()))
}
