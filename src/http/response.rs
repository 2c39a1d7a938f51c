//! Response assembly.
//!
//! # Responsibilities
//! - Collect status/header changes requested by the encoder
//! - Attach the configured content type to encoded bodies
//!
//! # Design Decisions
//! - Status defaults to 200; the envelope's own status carries success/failure
//! - Only auth failures change the HTTP status (401)

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::encoder::ResponseSink;

/// Status and headers for a response whose body is produced by the encoder.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl Default for ResponseHead {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
        }
    }
}

impl ResponseSink for ResponseHead {
    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}

impl ResponseHead {
    /// Finish the response with `body` encoded as UTF-8 `mime_type`.
    pub fn with_body(mut self, body: String, mime_type: &str) -> Response {
        let content_type = HeaderValue::from_str(&format!("{mime_type}; charset=UTF-8"))
            .unwrap_or_else(|_| HeaderValue::from_static("application/json; charset=UTF-8"));
        self.headers.insert(header::CONTENT_TYPE, content_type);

        (self.status, self.headers, Body::from(body)).into_response()
    }
}
