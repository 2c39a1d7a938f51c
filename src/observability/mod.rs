//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and the encoder produce:
//!     → logging.rs (structured log events, disclosure traces)
//!     → metrics.rs (request counters and latency)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
