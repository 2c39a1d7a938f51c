//! Request-handling error types.

use thiserror::Error;

use crate::request::UnsupportedCapability;

/// Boxed cause carried by generic failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can surface while serving a search API request.
///
/// Every variant is convertible to a response envelope; see
/// [`ResponseEncoder::encode_failure`](crate::encoder::ResponseEncoder::encode_failure).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller's access token was rejected upstream.
    /// `error_type` is the machine-readable reason (e.g. `expired_token`).
    #[error("{message}")]
    InvalidAccessToken { error_type: String, message: String },

    /// A restricted request flavor was asked for a field it does not carry.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedCapability),

    /// The query could not be understood by the search engine.
    #[error("{0}")]
    InvalidQuery(String),

    /// The search engine failed while executing the request.
    #[error("{message}")]
    Search {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl ApiError {
    pub fn invalid_access_token(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAccessToken {
            error_type: error_type.into(),
            message: message.into(),
        }
    }

    pub fn search(message: impl Into<String>) -> Self {
        Self::Search {
            message: message.into(),
            source: None,
        }
    }

    pub fn search_with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Search {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Stable name of the failure kind, used where a message is blank.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAccessToken { .. } => "InvalidAccessToken",
            Self::Unsupported(_) => "UnsupportedCapability",
            Self::InvalidQuery(_) => "InvalidQuery",
            Self::Search { .. } => "SearchFailure",
        }
    }

    /// The `error` attribute for a `WWW-Authenticate: Bearer` challenge,
    /// present only for credential failures.
    pub fn bearer_error(&self) -> Option<&str> {
        match self {
            Self::InvalidAccessToken { error_type, .. } => Some(error_type),
            _ => None,
        }
    }
}
