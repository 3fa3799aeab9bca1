use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use client::{FetchError, SubmissionSource};
use common::{Handle, SourceAppConfig, Submission};
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Notify;

use server::config::{AppConfig, CorsConfig, ServerConfig};
use server::in_flight::InFlight;
use server::state::AppState;

pub mod routes {
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn check(handle: &str) -> String {
        format!("/api/v1/users/{handle}/check")
    }
}

/// What the stub source does when asked for submissions.
pub enum Behavior {
    Return(Vec<Submission>),
    Fail,
    /// Block until the gate is opened, then return the submissions.
    Gated(Arc<Notify>, Vec<Submission>),
}

/// In-memory submission source that counts calls.
pub struct StubSource {
    behavior: Behavior,
    pub calls: AtomicUsize,
}

impl StubSource {
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SubmissionSource for StubSource {
    async fn fetch_submissions(&self, _handle: &Handle) -> client::Result<Vec<Submission>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Return(subs) => Ok(subs.clone()),
            Behavior::Fail => Err(FetchError::Status {
                status: 503,
                comment: None,
            }),
            Behavior::Gated(gate, subs) => {
                gate.notified().await;
                Ok(subs.clone())
            }
        }
    }
}

/// A running test server.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub source: Arc<StubSource>,
    pub in_flight: InFlight,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn(behavior: Behavior) -> Self {
        Self::spawn_with_cors(behavior, CorsConfig::default()).await
    }

    pub async fn spawn_with_cors(behavior: Behavior, cors: CorsConfig) -> Self {
        let source = Arc::new(StubSource::new(behavior));
        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors,
            },
            source: SourceAppConfig::default(),
        };

        let state = AppState::new(source.clone(), config);
        let in_flight = state.in_flight.clone();
        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            source,
            in_flight,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub fn source_calls(&self) -> usize {
        self.source.calls.load(Ordering::SeqCst)
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, body }
    }
}
