//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the search API service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Response envelope settings.
    pub api: ApiConfig,

    /// Page size and start position defaults for full search requests.
    pub paging: PagingConfig,

    /// Suggest endpoint defaults.
    pub suggest: SuggestConfig,

    /// Facet defaults.
    pub facet: FacetConfig,

    /// Highlight fragment settings.
    pub highlight: HighlightConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Response envelope configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Product version written into every envelope.
    pub product_version: String,

    /// Embed full error diagnostics in responses instead of a correlation id.
    /// Only meant for development.
    pub exception_included: bool,

    /// Honor the `callback` parameter and wrap responses as JSONP.
    pub jsonp_enabled: bool,

    /// Content type of emitted responses.
    pub mime_type: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            product_version: env!("CARGO_PKG_VERSION").to_string(),
            exception_included: false,
            jsonp_enabled: false,
            mime_type: "application/json".to_string(),
        }
    }
}

/// Paging configuration for full search requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PagingConfig {
    /// Page size used when `num` is absent or unparsable.
    pub page_size: u32,

    /// Upper bound for page size; out-of-range values snap to this.
    pub max_page_size: u32,

    /// Start position used when `start` is absent or unparsable.
    pub start: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            max_page_size: 100,
            start: 0,
        }
    }
}

/// Suggest endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Number of suggestions when `num` is absent or unparsable.
    pub default_num: u32,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self { default_num: 10 }
    }
}

/// Facet configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FacetConfig {
    pub default_size: u32,
    pub default_min_doc_count: u64,
}

impl Default for FacetConfig {
    fn default() -> Self {
        Self {
            default_size: 100,
            default_min_doc_count: 1,
        }
    }
}

/// Highlight configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Characters per highlight fragment.
    pub fragment_size: u32,

    /// Maximum fragments per field.
    pub number_of_fragments: u32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            fragment_size: 100,
            number_of_fragments: 5,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.paging.page_size, 20);
        assert_eq!(config.paging.max_page_size, 100);
        assert_eq!(config.suggest.default_num, 10);
        assert!(!config.api.jsonp_enabled);
        assert!(!config.api.exception_included);
        assert_eq!(config.api.mime_type, "application/json");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            [api]
            product_version = "1.0"
            jsonp_enabled = true

            [paging]
            max_page_size = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.api.product_version, "1.0");
        assert!(config.api.jsonp_enabled);
        assert_eq!(config.paging.max_page_size, 50);
        assert_eq!(config.paging.page_size, 20);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }
}
