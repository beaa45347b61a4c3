//! In-process stand-in for a `/hackrx/run` server.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const TEST_TOKEN: &str = "test-token-5ffa312d8b283e49";

const DEFAULT_ANSWER: &str =
    "Based on the provided policy document, I cannot find specific information to answer this question accurately.";

fn canned_answer(question: &str) -> &'static str {
    match question {
        "What is the grace period for premium payment?" => "30 days",
        "What is the waiting period for pre-existing diseases?" => "48 months",
        "Does this policy cover maternity expenses, and what are the conditions?" => {
            "Yes, with a 9-month waiting period."
        }
        _ => DEFAULT_ANSWER,
    }
}

#[derive(Clone)]
pub enum Reply {
    /// Checks the bearer token and answers each query from the canned table.
    Canned,
    /// Always replies with this status and body, whatever was sent.
    Fixed { status: u16, body: String },
    /// Waits before replying.
    Stall(Duration),
}

#[derive(Debug, Clone)]
pub struct Captured {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    reply: Reply,
    captured: Arc<Mutex<Vec<Captured>>>,
}

pub struct StubServer {
    pub url: String,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl StubServer {
    pub async fn start(reply: Reply) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            reply,
            captured: captured.clone(),
        };

        let app = Router::new()
            .route("/hackrx/run", post(hackrx_run))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}/hackrx/run", addr),
            captured,
        }
    }

    pub async fn requests(&self) -> Vec<Captured> {
        self.captured.lock().await.clone()
    }
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

async fn hackrx_run(
    State(state): State<StubState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let parsed: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    state.captured.lock().await.push(Captured {
        authorization: header_value(&headers, header::AUTHORIZATION),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        accept: header_value(&headers, header::ACCEPT),
        body: parsed.clone(),
    });

    match state.reply {
        Reply::Fixed { status, body } => {
            let status = StatusCode::from_u16(status).unwrap();
            (status, body).into_response()
        }
        Reply::Stall(delay) => {
            tokio::time::sleep(delay).await;
            Json(json!({ "answers": [] })).into_response()
        }
        Reply::Canned => {
            let authorized = bearer
                .map(|TypedHeader(auth)| auth.token() == TEST_TOKEN)
                .unwrap_or(false);
            if !authorized {
                return (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "detail": "Invalid or missing API key" })),
                )
                    .into_response();
            }

            let answers: Vec<&str> = parsed["queries"]
                .as_array()
                .map(|queries| {
                    queries
                        .iter()
                        .map(|q| canned_answer(q.as_str().unwrap_or_default()))
                        .collect()
                })
                .unwrap_or_default();

            Json(json!({ "answers": answers, "processing_time_ms": 3 })).into_response()
        }
    }
}

/// Sends a 200 status line promising more body than it delivers, then hangs up.
pub async fn truncated_body_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 16 * 1024];
        let _ = socket.read(&mut buf).await;
        let _ = socket
            .write_all(
                b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 1000\r\n\r\n{\"answers\": [",
            )
            .await;
        let _ = socket.shutdown().await;
        // Hold the socket so the client sees a clean EOF rather than a reset.
        tokio::time::sleep(Duration::from_millis(500)).await;
    });

    format!("http://{}/hackrx/run", addr)
}
