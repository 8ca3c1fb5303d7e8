//! In-process mock of the BUFU file server for integration tests.
//!
//! Binds an ephemeral port, answers every request with a configured status
//! and body, and records what the client actually sent.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;

/// One request as seen by the mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    reply_status: StatusCode,
    reply_body: String,
    delay: Option<Duration>,
}

/// Handle to a running mock file server.
pub struct MockServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    /// Base URL suitable for `BUFU_URL`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Everything the server has received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> impl IntoResponse {
    state
        .requests
        .lock()
        .expect("requests lock poisoned")
        .push(RecordedRequest {
            method: method.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
            body: body.to_vec(),
        });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    (state.reply_status, state.reply_body.clone())
}

/// Start a mock that answers every request with `status` and `body`.
pub async fn spawn_mock(status: StatusCode, body: &str) -> MockServer {
    spawn_mock_inner(status, body, None).await
}

/// Start a mock that sleeps for `delay` before answering.
pub async fn spawn_slow_mock(status: StatusCode, body: &str, delay: Duration) -> MockServer {
    spawn_mock_inner(status, body, Some(delay)).await
}

async fn spawn_mock_inner(status: StatusCode, body: &str, delay: Option<Duration>) -> MockServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        requests: requests.clone(),
        reply_status: status,
        reply_body: body.to_string(),
        delay,
    };

    let router = Router::new().fallback(record).with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock server");
    let addr = listener.local_addr().expect("mock server has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server failed");
    });

    MockServer { addr, requests }
}

/// Reserve an address nothing is listening on.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind throwaway listener");
    let addr = listener.local_addr().expect("listener has no local addr");
    drop(listener);
    addr
}
