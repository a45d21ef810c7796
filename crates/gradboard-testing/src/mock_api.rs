//! Canned JSON API served over real HTTP.
//!
//! Routes are matched by exact path. Unknown paths get axum's 404.

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::ops::Deref;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

type Hits = Arc<Mutex<HashMap<String, usize>>>;

#[derive(Debug, Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
}

/// Route table for a mock server. Registering a path twice keeps the last one.
#[derive(Debug, Clone, Default)]
pub struct MockApiBuilder {
    routes: BTreeMap<String, CannedResponse>,
}

impl MockApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with 200
    pub fn json(self, path: &str, body: &Value) -> Self {
        self.raw(path, 200, body.to_string())
    }

    /// Serve an error status with a small JSON error body
    pub fn status(self, path: &str, status: u16) -> Self {
        let body = serde_json::json!({ "error": format!("status {}", status) }).to_string();
        self.raw(path, status, body)
    }

    pub fn raw(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(
            path.to_string(),
            CannedResponse {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                body: body.into(),
            },
        );
        self
    }

    fn router(self, hits: Hits) -> Router {
        let mut router = Router::new();
        for (path, response) in self.routes {
            let hits = hits.clone();
            let key = path.clone();
            router = router.route(
                &path,
                get(move || {
                    let response = response.clone();
                    let hits = hits.clone();
                    let key = key.clone();
                    async move {
                        if let Ok(mut hits) = hits.lock() {
                            *hits.entry(key).or_insert(0) += 1;
                        }
                        (
                            response.status,
                            [(header::CONTENT_TYPE, "application/json")],
                            response.body,
                        )
                    }
                }),
            );
        }
        router
    }

    /// Bind 127.0.0.1 on an ephemeral port and serve on the current runtime
    pub async fn start(self) -> std::io::Result<MockApi> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let hits = Hits::default();
        let router = self.router(hits.clone());

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(MockApi { addr, hits, task })
    }

    /// Serve from a dedicated runtime, for synchronous tests that drive the
    /// CLI binary.
    pub fn start_background(self) -> std::io::Result<BackgroundMockApi> {
        let runtime = tokio::runtime::Runtime::new()?;
        let api = runtime.block_on(self.start())?;
        Ok(BackgroundMockApi {
            api,
            _runtime: runtime,
        })
    }
}

/// A running mock server. Stops when dropped.
pub struct MockApi {
    addr: SocketAddr,
    hits: Hits,
    task: JoinHandle<()>,
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder::new()
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests served on `path`
    pub fn hits(&self, path: &str) -> usize {
        self.hits
            .lock()
            .map(|hits| hits.get(path).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Mock server that owns its runtime
pub struct BackgroundMockApi {
    api: MockApi,
    _runtime: tokio::runtime::Runtime,
}

impl Deref for BackgroundMockApi {
    type Target = MockApi;

    fn deref(&self) -> &MockApi {
        &self.api
    }
}
