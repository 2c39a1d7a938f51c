//! Suggest request parameters (`/suggest` endpoint).
//!
//! Supports only query text, suggest fields, tags, a suggestion count and
//! languages. Everything else in [`SearchRequestParams`] reports
//! [`UnsupportedCapability`] instead of inventing a default.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::config::ServiceConfig;
use crate::request::capability::{
    Capability, Locale, SearchRequestParams, SearchRequestType, UnsupportedCapability,
};
use crate::request::info::{FacetInfo, GeoInfo, HighlightInfo};
use crate::request::json::{LANG_PARAM, NUM_PARAM};
use crate::request::raw::RawParams;

pub const SUGGEST_QUERY_PARAM: &str = "query";
pub const SUGGEST_FIELDS_PARAM: &str = "fields";
pub const SUGGEST_TAGS_PARAM: &str = "tags";

#[derive(Debug, Clone)]
pub struct SuggestRequestParams {
    query: Option<String>,
    suggest_fields: Vec<String>,
    tags: Vec<String>,
    num: u32,
    languages: Vec<String>,
    highlight_info: HighlightInfo,
    // Suggest requests never carry field terms or conditions.
    empty: BTreeMap<String, Vec<String>>,
}

impl SuggestRequestParams {
    pub fn parse(raw: &RawParams, config: &ServiceConfig) -> Self {
        Self {
            query: raw.get(SUGGEST_QUERY_PARAM).map(str::to_string),
            suggest_fields: split_list(raw.get(SUGGEST_FIELDS_PARAM)),
            tags: split_list(raw.get(SUGGEST_TAGS_PARAM)),
            num: raw
                .get(NUM_PARAM)
                .and_then(|v| v.parse().ok())
                .unwrap_or(config.suggest.default_num),
            languages: raw.get_all(LANG_PARAM).to_vec(),
            highlight_info: HighlightInfo::from_config(&config.highlight),
            empty: BTreeMap::new(),
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn suggest_fields(&self) -> &[String] {
        &self.suggest_fields
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn num(&self) -> u32 {
        self.num
    }

    fn unsupported<T>(capability: &'static str) -> Capability<T> {
        Err(UnsupportedCapability::new(SearchRequestType::Suggest, capability))
    }
}

/// Split a comma-joined list. Blank input yields nothing; items are not
/// trimmed; trailing empty items are dropped, interior ones kept.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Vec::new();
    };
    let mut items: Vec<String> = value.split(',').map(str::to_string).collect();
    while items.last().is_some_and(|item| item.is_empty()) {
        items.pop();
    }
    items
}

impl SearchRequestParams for SuggestRequestParams {
    fn request_type(&self) -> SearchRequestType {
        SearchRequestType::Suggest
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.empty
    }

    fn conditions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.empty
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn highlight_info(&self) -> HighlightInfo {
        self.highlight_info
    }

    fn extra_queries(&self) -> Capability<&[String]> {
        Self::unsupported("extra_queries")
    }

    fn sort(&self) -> Capability<Option<&str>> {
        Self::unsupported("sort")
    }

    fn start_position(&self) -> Capability<u32> {
        Self::unsupported("start_position")
    }

    fn offset(&self) -> Capability<u32> {
        Self::unsupported("offset")
    }

    fn page_size(&self) -> Capability<u32> {
        Self::unsupported("page_size")
    }

    fn attribute(&self, _name: &str) -> Capability<Option<&Value>> {
        Self::unsupported("attribute")
    }

    fn locale(&self) -> Capability<Locale> {
        Self::unsupported("locale")
    }

    fn similar_doc_hash(&self) -> Capability<Option<&str>> {
        Self::unsupported("similar_doc_hash")
    }

    fn track_total_hits(&self) -> Capability<Option<&str>> {
        Self::unsupported("track_total_hits")
    }

    fn facet_info(&self) -> Capability<Option<&FacetInfo>> {
        Self::unsupported("facet_info")
    }

    fn geo_info(&self) -> Capability<Option<&GeoInfo>> {
        Self::unsupported("geo_info")
    }
}
