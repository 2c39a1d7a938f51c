//! Response envelope construction.
//!
//! Every response, success or failure, has the shape
//! `{"response":{"version":"<v>","status":<n>[,<body>]}}`, optionally wrapped
//! as `/**/<callback>(...)` for JSONP.

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use tracing::warn;

use crate::config::ServiceConfig;
use crate::encoder::callback::escape_callback_name;
use crate::encoder::disclosure::ErrorDisclosure;
use crate::encoder::value::{escape_json, EncodableValue};
use crate::error::ApiError;

/// Envelope status for a successful request.
pub const STATUS_OK: i32 = 0;
/// Envelope status for a failed request.
pub const STATUS_ERROR: i32 = 1;

/// Transport-side response metadata the encoder may have to touch.
pub trait ResponseSink {
    fn set_status(&mut self, status: StatusCode);
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);
}

/// Turns statuses, body fragments and errors into the final response text.
#[derive(Debug, Clone)]
pub struct ResponseEncoder {
    config: Arc<ServiceConfig>,
    disclosure: ErrorDisclosure,
}

impl ResponseEncoder {
    pub fn new(config: Arc<ServiceConfig>) -> Self {
        let disclosure = ErrorDisclosure::from_config(&config.api);
        Self { config, disclosure }
    }

    pub fn mime_type(&self) -> &str {
        &self.config.api.mime_type
    }

    /// Encode a response without an error.
    ///
    /// With [`STATUS_OK`] a blank fragment is omitted; any other status embeds
    /// the fragment as given. The fragment must already be valid JSON members.
    pub fn encode_success(&self, status: i32, body: Option<&str>, callback: Option<&str>) -> String {
        self.wrap_envelope(status, body, callback)
    }

    /// Encode a failed request.
    ///
    /// Credential failures set `401` and a `WWW-Authenticate` challenge on
    /// `sink` first. The client message follows the configured disclosure
    /// policy and replaces the body unless `status` is [`STATUS_OK`].
    pub fn encode_failure(
        &self,
        sink: &mut impl ResponseSink,
        status: i32,
        body: Option<&str>,
        error: &ApiError,
        callback: Option<&str>,
    ) -> String {
        if let Some(error_type) = error.bearer_error() {
            sink.set_status(StatusCode::UNAUTHORIZED);
            sink.set_header(header::WWW_AUTHENTICATE, bearer_challenge(error_type));
        }

        let message = self.disclosure.message_for(error);
        if status == STATUS_OK {
            let body = body.filter(|b| !b.trim().is_empty());
            return self.wrap_envelope(status, body, callback);
        }

        let content = format!("\"message\":{}", escape_json(&EncodableValue::String(message)));
        self.wrap_envelope(status, Some(&content), callback)
    }

    /// Build the envelope around `body`, applying JSONP when enabled and requested.
    pub fn wrap_envelope(&self, status: i32, body: Option<&str>, callback: Option<&str>) -> String {
        let callback = callback
            .filter(|cb| !cb.trim().is_empty())
            .filter(|_| self.config.api.jsonp_enabled);

        let mut buf = String::with_capacity(1000);
        if let Some(cb) = callback {
            buf.push_str(&escape_callback_name(cb));
            buf.push('(');
        }
        buf.push_str("{\"response\":{\"version\":");
        buf.push_str(&escape_json(&EncodableValue::from(
            self.config.api.product_version.as_str(),
        )));
        buf.push_str(",\"status\":");
        buf.push_str(&status.to_string());
        if let Some(body) = body.filter(|b| !b.trim().is_empty()) {
            buf.push(',');
            buf.push_str(body);
        }
        buf.push_str("}}");
        if callback.is_some() {
            buf.push(')');
        }
        buf
    }
}

/// Join `(key, value)` pairs into envelope body members: `"k1":v1,"k2":v2`.
pub fn body_fragment<'a, I>(members: I) -> String
where
    I: IntoIterator<Item = (&'a str, EncodableValue)>,
{
    let mut buf = String::new();
    for (key, value) in members {
        if !buf.is_empty() {
            buf.push(',');
        }
        buf.push_str(&escape_json(&EncodableValue::from(key)));
        buf.push(':');
        buf.push_str(&escape_json(&value));
    }
    buf
}

fn bearer_challenge(error_type: &str) -> HeaderValue {
    let value = format!("Bearer error=\"{}\"", error_type);
    HeaderValue::from_str(&value).unwrap_or_else(|_| {
        warn!(error_type = %error_type, "Unrepresentable bearer error type, using invalid_token");
        HeaderValue::from_static("Bearer error=\"invalid_token\"")
    })
}
