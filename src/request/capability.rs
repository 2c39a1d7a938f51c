//! The parameter interface shared by all request flavors.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use crate::request::info::{FacetInfo, GeoInfo, HighlightInfo};

/// Which endpoint dialect produced a parameter view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchRequestType {
    Json,
    Suggest,
}

impl fmt::Display for SearchRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Suggest => f.write_str("suggest"),
        }
    }
}

/// A request flavor was asked for a field it does not carry.
///
/// This is a contract violation by the caller, not bad client input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported capability for {flavor} requests: {capability}")]
pub struct UnsupportedCapability {
    pub flavor: SearchRequestType,
    pub capability: &'static str,
}

impl UnsupportedCapability {
    pub fn new(flavor: SearchRequestType, capability: &'static str) -> Self {
        Self { flavor, capability }
    }
}

/// Result of an accessor that only some flavors support.
pub type Capability<T> = Result<T, UnsupportedCapability>;

/// Locale of a request. This layer never negotiates, so only root exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Root,
}

/// Normalized, read-only view of one search request.
pub trait SearchRequestParams: Send + Sync {
    fn request_type(&self) -> SearchRequestType;

    fn query(&self) -> Option<&str>;

    /// Per-field terms, keyed by field name.
    fn fields(&self) -> &BTreeMap<String, Vec<String>>;

    /// Filter conditions, keyed by field name.
    fn conditions(&self) -> &BTreeMap<String, Vec<String>>;

    fn languages(&self) -> &[String];

    fn highlight_info(&self) -> HighlightInfo;

    fn extra_queries(&self) -> Capability<&[String]>;

    fn sort(&self) -> Capability<Option<&str>>;

    fn start_position(&self) -> Capability<u32>;

    fn offset(&self) -> Capability<u32>;

    fn page_size(&self) -> Capability<u32>;

    fn attribute(&self, name: &str) -> Capability<Option<&Value>>;

    fn locale(&self) -> Capability<Locale>;

    fn similar_doc_hash(&self) -> Capability<Option<&str>>;

    fn track_total_hits(&self) -> Capability<Option<&str>>;

    fn facet_info(&self) -> Capability<Option<&FacetInfo>>;

    fn geo_info(&self) -> Capability<Option<&GeoInfo>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = UnsupportedCapability::new(SearchRequestType::Suggest, "sort");
        assert_eq!(err.to_string(), "unsupported capability for suggest requests: sort");
    }

    #[test]
    fn test_default_locale_is_root() {
        assert_eq!(Locale::default(), Locale::Root);
    }
}
