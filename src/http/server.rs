//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the search API handlers
//! - Wire up middleware (tracing, timeout)
//! - Bind server to listener
//! - Share the configuration snapshot, encoder and engine with handlers

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::encoder::ResponseEncoder;
use crate::http::handlers::{json_search, suggest};
use crate::search::SearchEngine;

pub const JSON_PATH: &str = "/json";
pub const SUGGEST_PATH: &str = "/suggest";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub encoder: ResponseEncoder,
    pub engine: Arc<dyn SearchEngine>,
}

/// HTTP server for the search API.
pub struct HttpServer {
    router: Router,
    config: Arc<ServiceConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and engine.
    pub fn new(config: ServiceConfig, engine: Arc<dyn SearchEngine>) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            encoder: ResponseEncoder::new(config.clone()),
            config: config.clone(),
            engine,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route(JSON_PATH, get(json_search))
            .route(SUGGEST_PATH, get(suggest))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// Run the server until Ctrl+C.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Run the server until `signal` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, signal: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            jsonp_enabled = self.config.api.jsonp_enabled,
            exception_included = self.config.api.exception_included,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
