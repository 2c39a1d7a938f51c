//! HTTP front for the search API.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → handlers.rs (raw query → normalized params → engine → encoder)
//!     → response.rs (status, headers, content type)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use response::ResponseHead;
pub use server::{AppState, HttpServer, JSON_PATH, SUGGEST_PATH};
