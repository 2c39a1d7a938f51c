//! Search API service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ───────────────▶ http::server ──▶ http::handlers
//!                                        │
//!                                        ▼
//!                              request (RawParams → JsonRequestParams
//!                                                 / SuggestRequestParams)
//!                                        │
//!                                        ▼
//!                              search::SearchEngine (injected)
//!                                        │
//!                                        ▼
//!   Client Response            encoder (envelope, JSONP, disclosure)
//!   ◀─────────────── http::response ◀────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use search_api::config::{load_config, ServiceConfig};
use search_api::observability::{logging, metrics};
use search_api::search::EmptySearchEngine;
use search_api::HttpServer;

#[derive(Parser)]
#[command(name = "search-api")]
#[command(about = "JSON/JSONP search API front end", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability);

    tracing::info!("search-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        page_size = config.paging.page_size,
        max_page_size = config.paging.max_page_size,
        jsonp_enabled = config.api.jsonp_enabled,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    tracing::warn!("No search backend configured, all queries return empty results");
    let server = HttpServer::new(config, Arc::new(EmptySearchEngine));
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
