//! Full search request parameters (`/json` endpoint).

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use crate::config::{PagingConfig, ServiceConfig};
use crate::request::capability::{Capability, Locale, SearchRequestParams, SearchRequestType};
use crate::request::info::{FacetInfo, GeoInfo, HighlightInfo};
use crate::request::raw::RawParams;

pub const QUERY_PARAM: &str = "q";
pub const NUM_PARAM: &str = "num";
pub const START_PARAM: &str = "start";
pub const OFFSET_PARAM: &str = "offset";
pub const EXTRA_QUERY_PARAM: &str = "ex_q";
pub const LANG_PARAM: &str = "lang";
pub const SORT_PARAM: &str = "sort";
pub const SIMILAR_DOC_HASH_PARAM: &str = "sdh";
pub const TRACK_TOTAL_HITS_PARAM: &str = "track_total_hits";
pub const FIELDS_PREFIX: &str = "fields.";
pub const CONDITIONS_PREFIX: &str = "as.";

/// Every field a full search request can carry, parsed once and bounded.
#[derive(Debug, Clone)]
pub struct JsonRequestParams {
    query: Option<String>,
    page_size: u32,
    start_position: u32,
    offset: u32,
    extra_queries: Vec<String>,
    fields: BTreeMap<String, Vec<String>>,
    conditions: BTreeMap<String, Vec<String>>,
    languages: Vec<String>,
    sort: Option<String>,
    similar_doc_hash: Option<String>,
    track_total_hits: Option<String>,
    facet_info: Option<FacetInfo>,
    geo_info: Option<GeoInfo>,
    highlight_info: HighlightInfo,
    attributes: HashMap<String, Value>,
}

impl JsonRequestParams {
    pub fn parse(raw: &RawParams, config: &ServiceConfig) -> Self {
        let owned = |name: &str| raw.get(name).map(str::to_string);

        Self {
            query: owned(QUERY_PARAM),
            page_size: page_size(raw.get(NUM_PARAM), &config.paging),
            start_position: raw
                .get(START_PARAM)
                .and_then(|v| v.parse().ok())
                .unwrap_or(config.paging.start),
            offset: raw.get(OFFSET_PARAM).and_then(|v| v.parse().ok()).unwrap_or(0),
            extra_queries: raw.get_all(EXTRA_QUERY_PARAM).to_vec(),
            fields: raw.strip_prefixed(FIELDS_PREFIX),
            conditions: raw.strip_prefixed(CONDITIONS_PREFIX),
            languages: raw.get_all(LANG_PARAM).to_vec(),
            sort: owned(SORT_PARAM),
            similar_doc_hash: owned(SIMILAR_DOC_HASH_PARAM),
            track_total_hits: owned(TRACK_TOTAL_HITS_PARAM),
            facet_info: FacetInfo::from_params(raw, &config.facet),
            geo_info: GeoInfo::from_params(raw),
            highlight_info: HighlightInfo::from_config(&config.highlight),
            attributes: raw.attributes().clone(),
        }
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn start_position(&self) -> u32 {
        self.start_position
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn extra_queries(&self) -> &[String] {
        &self.extra_queries
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }
}

/// Absent or unparsable → configured default; parsed but `<= 0` or above the
/// maximum → the maximum. A default above the maximum also snaps to it.
fn page_size(raw: Option<&str>, paging: &PagingConfig) -> u32 {
    let max = paging.max_page_size;
    let requested = raw
        .and_then(|v| v.parse::<i32>().ok())
        .map(i64::from)
        .unwrap_or(i64::from(paging.page_size));
    if requested <= 0 || requested > i64::from(max) {
        max
    } else {
        requested as u32
    }
}

impl SearchRequestParams for JsonRequestParams {
    fn request_type(&self) -> SearchRequestType {
        SearchRequestType::Json
    }

    fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    fn conditions(&self) -> &BTreeMap<String, Vec<String>> {
        &self.conditions
    }

    fn languages(&self) -> &[String] {
        &self.languages
    }

    fn highlight_info(&self) -> HighlightInfo {
        self.highlight_info
    }

    fn extra_queries(&self) -> Capability<&[String]> {
        Ok(&self.extra_queries)
    }

    fn sort(&self) -> Capability<Option<&str>> {
        Ok(self.sort.as_deref())
    }

    fn start_position(&self) -> Capability<u32> {
        Ok(self.start_position)
    }

    fn offset(&self) -> Capability<u32> {
        Ok(self.offset)
    }

    fn page_size(&self) -> Capability<u32> {
        Ok(self.page_size)
    }

    fn attribute(&self, name: &str) -> Capability<Option<&Value>> {
        Ok(self.attributes.get(name))
    }

    fn locale(&self) -> Capability<Locale> {
        Ok(Locale::Root)
    }

    fn similar_doc_hash(&self) -> Capability<Option<&str>> {
        Ok(self.similar_doc_hash.as_deref())
    }

    fn track_total_hits(&self) -> Capability<Option<&str>> {
        Ok(self.track_total_hits.as_deref())
    }

    fn facet_info(&self) -> Capability<Option<&FacetInfo>> {
        Ok(self.facet_info.as_ref())
    }

    fn geo_info(&self) -> Capability<Option<&GeoInfo>> {
        Ok(self.geo_info.as_ref())
    }
}
