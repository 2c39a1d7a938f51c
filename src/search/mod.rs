//! Search engine seam.
//!
//! Query building and ranking live outside this crate. The dispatcher hands
//! normalized parameters to a [`SearchEngine`] and encodes whatever comes back.

use crate::encoder::EncodableValue;
use crate::error::ApiError;
use crate::request::{SearchRequestParams, SuggestRequestParams};

/// Hits for one page of a full search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    /// Total matches, not just this page.
    pub record_count: u64,
    pub exec_time_ms: u64,
    /// One object per document.
    pub documents: Vec<EncodableValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestResult {
    pub record_count: u64,
    pub exec_time_ms: u64,
    pub items: Vec<EncodableValue>,
}

/// Executes normalized requests.
pub trait SearchEngine: Send + Sync {
    fn search(&self, params: &dyn SearchRequestParams) -> Result<SearchResult, ApiError>;

    fn suggest(&self, params: &SuggestRequestParams) -> Result<SuggestResult, ApiError>;
}

/// Engine that matches nothing. Used when no backend is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptySearchEngine;

impl SearchEngine for EmptySearchEngine {
    fn search(&self, _params: &dyn SearchRequestParams) -> Result<SearchResult, ApiError> {
        Ok(SearchResult::default())
    }

    fn suggest(&self, _params: &SuggestRequestParams) -> Result<SuggestResult, ApiError> {
        Ok(SuggestResult::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::request::{JsonRequestParams, RawParams};

    #[test]
    fn test_empty_engine() {
        let config = ServiceConfig::default();
        let raw = RawParams::from_query("q=rust&query=ru");
        let engine = EmptySearchEngine;

        let result = engine.search(&JsonRequestParams::parse(&raw, &config)).unwrap();
        assert_eq!(result, SearchResult::default());

        let result = engine.suggest(&SuggestRequestParams::parse(&raw, &config)).unwrap();
        assert!(result.items.is_empty());
    }
}
