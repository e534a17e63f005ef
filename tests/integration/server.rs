//! Local stand-in for the crates.io API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use std::collections::HashMap;
use std::sync::Arc;

type Routes = Arc<HashMap<String, (StatusCode, String)>>;

/// Canned registry responses keyed by crate name.
#[derive(Debug, Default, Clone)]
pub struct TestServer {
    crates: HashMap<String, (StatusCode, String)>,
}

impl TestServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `GET /api/v1/crates/{name}` with `status` and `body`.
    pub fn with_crate(mut self, name: &str, status: u16, body: impl Into<String>) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.crates.insert(name.to_string(), (status, body.into()));
        self
    }

    /// Bind to an ephemeral port, serve in the background and return the base URL.
    ///
    /// Unknown crates get a 404. The server lives as long as the current runtime.
    pub async fn start(self) -> String {
        let app = Router::new()
            .route("/api/v1/crates/:name", get(crate_metadata))
            .with_state(Arc::new(self.crates));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test server");
        let addr = listener.local_addr().expect("test server address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        format!("http://{addr}")
    }
}

async fn crate_metadata(State(crates): State<Routes>, Path(name): Path<String>) -> impl IntoResponse {
    let (status, body) = crates
        .get(&name)
        .cloned()
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, r#"{"errors":[]}"#.to_string()));

    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
