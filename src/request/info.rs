//! Facet, geo and highlight settings carried alongside a search request.

use tracing::debug;

use crate::config::{FacetConfig, HighlightConfig};
use crate::request::raw::RawParams;

pub const FACET_FIELD_PARAM: &str = "facet.field";
pub const FACET_QUERY_PARAM: &str = "facet.query";
pub const FACET_SIZE_PARAM: &str = "facet.size";
pub const FACET_MIN_DOC_COUNT_PARAM: &str = "facet.minDocCount";

const GEO_PREFIX: &str = "geo.";
const GEO_POINT_SUFFIX: &str = ".point";
const GEO_DISTANCE_SUFFIX: &str = ".distance";

/// Requested facet aggregations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetInfo {
    pub fields: Vec<String>,
    pub queries: Vec<String>,
    pub size: u32,
    pub min_doc_count: u64,
}

impl FacetInfo {
    /// `None` unless at least one facet field or query was requested.
    pub fn from_params(raw: &RawParams, config: &FacetConfig) -> Option<Self> {
        let fields = non_blank(raw.get_all(FACET_FIELD_PARAM));
        let queries = non_blank(raw.get_all(FACET_QUERY_PARAM));
        if fields.is_empty() && queries.is_empty() {
            return None;
        }

        Some(Self {
            fields,
            queries,
            size: raw
                .get(FACET_SIZE_PARAM)
                .and_then(|v| v.parse().ok())
                .unwrap_or(config.default_size),
            min_doc_count: raw
                .get(FACET_MIN_DOC_COUNT_PARAM)
                .and_then(|v| v.parse().ok())
                .unwrap_or(config.default_min_doc_count),
        })
    }
}

/// A distance filter around a point on one geo field.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoDistanceFilter {
    pub field: String,
    pub lat: f64,
    pub lon: f64,
    /// Distance with unit as given, e.g. `10km`.
    pub distance: String,
}

/// Geo filters from `geo.<field>.point` / `geo.<field>.distance` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoInfo {
    pub filters: Vec<GeoDistanceFilter>,
}

impl GeoInfo {
    /// `None` when no complete, valid point/distance pair is present.
    pub fn from_params(raw: &RawParams) -> Option<Self> {
        let mut filters = Vec::new();
        for name in raw.names() {
            let Some(field) = name
                .strip_prefix(GEO_PREFIX)
                .and_then(|rest| rest.strip_suffix(GEO_POINT_SUFFIX))
                .filter(|field| !field.is_empty())
            else {
                continue;
            };

            let distance_param = format!("{GEO_PREFIX}{field}{GEO_DISTANCE_SUFFIX}");
            let Some(distance) = raw.get(&distance_param).filter(|d| !d.trim().is_empty()) else {
                debug!(field = %field, "Geo point without distance, skipping");
                continue;
            };

            for point in raw.get_all(name) {
                match parse_point(point) {
                    Some((lat, lon)) => filters.push(GeoDistanceFilter {
                        field: field.to_string(),
                        lat,
                        lon,
                        distance: distance.to_string(),
                    }),
                    None => debug!(field = %field, point = %point, "Invalid geo point, skipping"),
                }
            }
        }

        if filters.is_empty() {
            None
        } else {
            Some(Self { filters })
        }
    }
}

fn parse_point(value: &str) -> Option<(f64, f64)> {
    let (lat, lon) = value.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
}

/// Highlight fragment settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightInfo {
    pub fragment_size: u32,
    pub number_of_fragments: u32,
}

impl HighlightInfo {
    pub fn from_config(config: &HighlightConfig) -> Self {
        Self {
            fragment_size: config.fragment_size,
            number_of_fragments: config.number_of_fragments,
        }
    }
}

fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect()
}
