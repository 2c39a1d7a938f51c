//! Search API handlers.
//!
//! Each handler normalizes the raw query, calls the engine on the blocking
//! pool, and encodes the outcome. A failing engine still produces a well-formed envelope.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, RawQuery, State},
    http::HeaderMap,
    response::Response,
};
use tracing::{debug, warn};

use crate::encoder::{body_fragment, detailed_message, EncodableValue, STATUS_ERROR, STATUS_OK};
use crate::error::ApiError;
use crate::http::response::ResponseHead;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::request::{JsonRequestParams, RawParams, SuggestRequestParams, CALLBACK_PARAM};
use crate::search::{SearchResult, SuggestResult};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const REQUEST_ID_ATTRIBUTE: &str = "request_id";
pub const REMOTE_ADDR_ATTRIBUTE: &str = "remote_addr";

/// `GET /json` — full search.
pub async fn json_search(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start = Instant::now();
    let raw = raw_params(query.as_deref(), &headers, addr);
    let params = JsonRequestParams::parse(&raw, &state.config);

    debug!(
        query = ?params.query(),
        page_size = params.page_size(),
        start = params.start_position(),
        "Handling search request"
    );

    let engine = state.engine.clone();
    let outcome = run_blocking(move || {
        engine
            .search(&params)
            .map(|result| search_fragment(&params, &result))
    })
    .await;
    respond(&state, "json", &raw, outcome, start)
}

/// `GET /suggest` — suggest-only requests.
pub async fn suggest(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start = Instant::now();
    let raw = raw_params(query.as_deref(), &headers, addr);
    let params = SuggestRequestParams::parse(&raw, &state.config);

    debug!(
        query = ?params.query(),
        num = params.num(),
        fields = ?params.suggest_fields(),
        "Handling suggest request"
    );

    let engine = state.engine.clone();
    let outcome = run_blocking(move || {
        engine
            .suggest(&params)
            .map(|result| suggest_fragment(&params, &result))
    })
    .await;
    respond(&state, "suggest", &raw, outcome, start)
}

/// Run an engine call on the blocking pool so the request timeout can fire.
async fn run_blocking<F>(call: F) -> Result<String, ApiError>
where
    F: FnOnce() -> Result<String, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .unwrap_or_else(|e| Err(ApiError::search_with_source("search task failed", e)))
}

fn raw_params(query: Option<&str>, headers: &HeaderMap, addr: SocketAddr) -> RawParams {
    let mut raw = RawParams::from_query(query.unwrap_or_default());
    if let Some(id) = headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()) {
        raw.set_attribute(REQUEST_ID_ATTRIBUTE, id);
    }
    raw.set_attribute(REMOTE_ADDR_ATTRIBUTE, addr.to_string());
    raw
}

fn respond(
    state: &AppState,
    endpoint: &'static str,
    raw: &RawParams,
    outcome: Result<String, ApiError>,
    start: Instant,
) -> Response {
    let callback = raw.get(CALLBACK_PARAM);
    let mut head = ResponseHead::default();

    let (status, body) = match outcome {
        Ok(fragment) => (
            STATUS_OK,
            state.encoder.encode_success(STATUS_OK, Some(&fragment), callback),
        ),
        Err(err) => {
            warn!(
                endpoint = endpoint,
                error = %detailed_message(Some(&err)),
                "Request failed"
            );
            (
                STATUS_ERROR,
                state
                    .encoder
                    .encode_failure(&mut head, STATUS_ERROR, None, &err, callback),
            )
        }
    };

    metrics::record_request(endpoint, head.status.as_u16(), status, start);
    head.with_body(body, state.encoder.mime_type())
}

fn search_fragment(params: &JsonRequestParams, result: &SearchResult) -> String {
    body_fragment([
        ("q", params.query().into()),
        ("exec_time", result.exec_time_ms.into()),
        ("page_size", params.page_size().into()),
        ("start", params.start_position().into()),
        ("record_count", result.record_count.into()),
        ("result", EncodableValue::Array(result.documents.clone())),
    ])
}

fn suggest_fragment(params: &SuggestRequestParams, result: &SuggestResult) -> String {
    body_fragment([
        ("query", params.query().into()),
        ("num", params.num().into()),
        ("exec_time", result.exec_time_ms.into()),
        ("record_count", result.record_count.into()),
        ("result", EncodableValue::Array(result.items.clone())),
    ])
}
