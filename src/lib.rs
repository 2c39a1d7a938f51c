//! Search API response encoding and request normalization.
//!
//! Untrusted, multi-valued query parameters become bounded, typed request
//! views ([`request`]); results and errors become the stable
//! `{"response":{...}}` envelope, optionally JSONP-wrapped ([`encoder`]).

pub mod config;
pub mod encoder;
pub mod error;
pub mod http;
pub mod observability;
pub mod request;
pub mod search;

pub use config::schema::ServiceConfig;
pub use encoder::ResponseEncoder;
pub use error::ApiError;
pub use http::HttpServer;
