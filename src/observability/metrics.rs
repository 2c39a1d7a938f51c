//! Metrics collection and exposition.
//!
//! # Metrics
//! - `search_api_requests_total` (counter): requests by endpoint, HTTP status, envelope status
//! - `search_api_request_duration_seconds` (histogram): handler latency by endpoint

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one handled API request.
pub fn record_request(endpoint: &'static str, http_status: u16, envelope_status: i32, start: Instant) {
    metrics::counter!(
        "search_api_requests_total",
        "endpoint" => endpoint,
        "http_status" => http_status.to_string(),
        "status" => envelope_status.to_string()
    )
    .increment(1);

    metrics::histogram!("search_api_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}
