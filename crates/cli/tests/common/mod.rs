//! Helpers for running the `create-job` binary against a local mock node.

use std::process::Output;
use std::sync::{Arc, Mutex};

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{extract::State, Json, Router};
use serde_json::json;

struct NodeState {
    specs_status: StatusCode,
    paths: Mutex<Vec<&'static str>>,
}

pub struct MockNode {
    pub base_url: String,
    state: Arc<NodeState>,
}

impl MockNode {
    /// Request paths received so far, in arrival order.
    pub fn paths(&self) -> Vec<&'static str> {
        self.state.paths.lock().unwrap().clone()
    }
}

/// Start a node that accepts any login and answers `/v2/specs` with
/// `specs_status`. Successful spec posts return job id `job-123`.
pub async fn spawn_node(specs_status: StatusCode) -> MockNode {
    let state = Arc::new(NodeState {
        specs_status,
        paths: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/sessions", post(create_session))
        .route("/v2/specs", post(create_spec))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock node");
    let addr = listener.local_addr().expect("mock node address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock node server");
    });

    MockNode {
        base_url: format!("http://{addr}"),
        state,
    }
}

/// Run the binary with `args`, pointing it at `base_url` (or leaving
/// `CHAINLINK_URL` unset when `None`).
pub async fn run_create_job(base_url: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_create-job"));
    cmd.args(args)
        .env_remove("CHAINLINK_URL")
        .env_remove("CHAINLINK_EMAIL")
        .env_remove("CHAINLINK_PASSWORD")
        .env_remove("REQUEST_TIMEOUT_SECS")
        .env("RUST_LOG", "create_job=info,ei_client=info")
        .env("NO_COLOR", "1")
        .kill_on_drop(true);

    if let Some(url) = base_url {
        cmd.env("CHAINLINK_URL", url);
    }

    cmd.output().await.expect("spawn create-job")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

async fn create_session(State(state): State<Arc<NodeState>>) -> Response {
    state.paths.lock().unwrap().push("/sessions");
    (
        StatusCode::OK,
        [(header::SET_COOKIE, "clsession=cli-session; Path=/; HttpOnly")],
        Json(json!({ "data": { "type": "session", "id": "sessionID" } })),
    )
        .into_response()
}

async fn create_spec(State(state): State<Arc<NodeState>>) -> Response {
    state.paths.lock().unwrap().push("/v2/specs");

    if !state.specs_status.is_success() {
        return (
            state.specs_status,
            Json(json!({ "errors": [{ "detail": "spec rejected" }] })),
        )
            .into_response();
    }

    (
        state.specs_status,
        Json(json!({ "data": { "type": "specs", "id": "job-123" } })),
    )
        .into_response()
}
