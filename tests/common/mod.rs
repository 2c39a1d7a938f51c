//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use search_api::config::ServiceConfig;
use search_api::encoder::EncodableValue;
use search_api::error::ApiError;
use search_api::request::{SearchRequestParams, SuggestRequestParams};
use search_api::search::{SearchEngine, SearchResult, SuggestResult};
use search_api::HttpServer;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the scripted engine saw on its last call.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub query: Option<String>,
    pub page_size: Option<u32>,
    pub start: Option<u32>,
    pub extra_queries: Vec<String>,
    pub request_id: Option<String>,
}

/// Engine that returns a fixed outcome and records what it was asked.
pub struct ScriptedEngine {
    outcome: Box<dyn Fn() -> Result<SearchResult, ApiError> + Send + Sync>,
    pub seen: Mutex<Option<SeenRequest>>,
}

impl ScriptedEngine {
    pub fn returning(result: SearchResult) -> Self {
        Self {
            outcome: Box::new(move || Ok(result.clone())),
            seen: Mutex::new(None),
        }
    }

    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> ApiError + Send + Sync + 'static,
    {
        Self {
            outcome: Box::new(move || Err(make_error())),
            seen: Mutex::new(None),
        }
    }
}

impl SearchEngine for ScriptedEngine {
    fn search(&self, params: &dyn SearchRequestParams) -> Result<SearchResult, ApiError> {
        let seen = SeenRequest {
            query: params.query().map(str::to_string),
            page_size: Some(params.page_size()?),
            start: Some(params.start_position()?),
            extra_queries: params.extra_queries()?.to_vec(),
            request_id: params
                .attribute("request_id")?
                .and_then(|v| v.as_str())
                .map(str::to_string),
        };
        *self.seen.lock().unwrap() = Some(seen);
        (self.outcome)()
    }

    fn suggest(&self, params: &SuggestRequestParams) -> Result<SuggestResult, ApiError> {
        // Asking a suggest request for its sort order is a contract violation.
        if params.tags().iter().any(|t| t == "sorted") {
            params.sort()?;
        }
        let items = params
            .suggest_fields()
            .iter()
            .map(|f| EncodableValue::object([("text", format!("{}:{}", f, params.query().unwrap_or("")))]))
            .collect::<Vec<_>>();
        Ok(SuggestResult {
            record_count: items.len() as u64,
            exec_time_ms: 1,
            items,
        })
    }
}

/// Engine that blocks its thread for `delay` before answering.
pub struct SlowEngine {
    pub delay: Duration,
}

impl SearchEngine for SlowEngine {
    fn search(&self, _params: &dyn SearchRequestParams) -> Result<SearchResult, ApiError> {
        std::thread::sleep(self.delay);
        Ok(SearchResult::default())
    }

    fn suggest(&self, _params: &SuggestRequestParams) -> Result<SuggestResult, ApiError> {
        std::thread::sleep(self.delay);
        Ok(SuggestResult::default())
    }
}

/// A running server and the handle that stops it.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Config used by the tests: version "1.0", everything else default.
pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.api.product_version = "1.0".into();
    config
}

/// Start the API on an ephemeral port.
pub async fn start_server(config: ServiceConfig, engine: Arc<dyn SearchEngine>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = HttpServer::new(config, engine);
    tokio::spawn(async move {
        let _ = server
            .run_until(listener, async move {
                let _ = rx.await;
            })
            .await;
    });

    TestServer {
        addr,
        shutdown: Some(tx),
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
