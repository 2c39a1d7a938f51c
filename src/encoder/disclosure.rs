//! Error disclosure policy.
//!
//! Decides what a client learns about a failure: either the full diagnostic
//! (message plus rendered cause chain) or an opaque `error_code:<uuid>` whose
//! diagnostic only goes to the log.

use std::error::Error;
use std::fmt::Write as _;

use tracing::{debug, warn, Level};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::request::UnsupportedCapability;

/// Prefix of the message sent instead of diagnostics.
pub const ERROR_CODE_PREFIX: &str = "error_code:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisclosure {
    /// Message and trace go to the client.
    IncludeDetail,
    /// Client gets a correlation id; detail is logged under it.
    CorrelationId,
}

impl ErrorDisclosure {
    pub fn from_config(api: &ApiConfig) -> Self {
        if api.exception_included {
            Self::IncludeDetail
        } else {
            Self::CorrelationId
        }
    }

    /// Client-facing message for `err`. Logs the diagnostic when redacting.
    pub fn message_for(self, err: &ApiError) -> String {
        match self {
            Self::IncludeDetail => full_diagnostic(err),
            Self::CorrelationId => {
                let error_code = Uuid::new_v4().to_string();
                if tracing::enabled!(Level::DEBUG) {
                    debug!(
                        error_code = %error_code,
                        "[{}] {}",
                        error_code,
                        full_diagnostic(err).replace('\n', "\\n")
                    );
                } else {
                    warn!(error_code = %error_code, "[{}] {}", error_code, err);
                }
                format!("{ERROR_CODE_PREFIX}{error_code}")
            }
        }
    }
}

/// Headline followed by the rendered trace: `message [ trace ]`.
pub fn full_diagnostic(err: &ApiError) -> String {
    let message = err.to_string();
    let mut buf = if message.trim().is_empty() {
        err.kind().to_string()
    } else {
        message
    };
    buf.push_str(" [ ");
    buf.push_str(&render_trace(err));
    buf.push_str(" ]");
    buf
}

/// Render an error and its cause chain, one frame per line.
pub fn render_trace(err: &(dyn Error + 'static)) -> String {
    let mut buf = String::new();
    let _ = write!(buf, "{}: {}", kind_of(err), err);
    let mut cause = err.source();
    while let Some(inner) = cause {
        let _ = write!(buf, "\n\tcaused by {}: {}", kind_of(inner), inner);
        cause = inner.source();
    }
    buf.push('\n');
    buf
}

/// One-line summary for handler logs: `Kind[message] nested: Kind[message]`.
pub fn detailed_message(err: Option<&ApiError>) -> String {
    let Some(err) = err else {
        return "Unknown".to_string();
    };
    let mut buf = String::new();
    let mut current: Option<&(dyn Error + 'static)> = Some(err);
    while let Some(e) = current {
        if !buf.is_empty() {
            buf.push_str(" nested: ");
        }
        let _ = write!(buf, "{}[{}]", kind_of(e), e);
        current = e.source();
    }
    buf
}

fn kind_of(err: &(dyn Error + 'static)) -> &'static str {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        api.kind()
    } else if err.is::<UnsupportedCapability>() {
        "UnsupportedCapability"
    } else if err.is::<std::io::Error>() {
        "IoError"
    } else {
        "Error"
    }
}
