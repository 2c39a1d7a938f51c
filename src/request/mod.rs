//! Request normalization subsystem.
//!
//! # Data Flow
//! ```text
//! raw query string
//!     → raw.rs (multi-valued RawParams + request attributes)
//!     → json.rs    (JsonRequestParams: every field, bounded and defaulted)
//!     → suggest.rs (SuggestRequestParams: query/fields/tags/num/lang only)
//!     → &dyn SearchRequestParams handed to the search engine
//! ```
//!
//! # Design Decisions
//! - Malformed values never fail a request; they fall back to defaults
//! - Parsing happens once at construction; views are immutable
//! - Accessors a flavor does not support return `UnsupportedCapability`

pub mod capability;
pub mod info;
pub mod json;
pub mod raw;
pub mod suggest;

pub use capability::{
    Capability, Locale, SearchRequestParams, SearchRequestType, UnsupportedCapability,
};
pub use info::{FacetInfo, GeoDistanceFilter, GeoInfo, HighlightInfo};
pub use json::JsonRequestParams;
pub use raw::RawParams;
pub use suggest::SuggestRequestParams;

/// Name of the JSONP callback parameter.
pub const CALLBACK_PARAM: &str = "callback";
