//! End-to-end tests for the search API endpoints.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::StatusCode;
use search_api::encoder::EncodableValue;
use search_api::error::ApiError;
use search_api::search::{EmptySearchEngine, SearchResult};
use serde_json::Value;

mod common;

use common::{client, start_server, test_config, ScriptedEngine, SlowEngine};

fn one_hit() -> SearchResult {
    SearchResult {
        record_count: 1,
        exec_time_ms: 4,
        documents: vec![EncodableValue::object([
            ("title", EncodableValue::from("Rust テスト")),
            ("score", EncodableValue::from(1.5)),
        ])],
    }
}

#[tokio::test]
async fn test_search_returns_plain_envelope() {
    let server = start_server(test_config(), Arc::new(ScriptedEngine::returning(one_hit()))).await;

    let res = client()
        .get(server.url("/json?q=rust&num=5&callback=cb"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=UTF-8"
    );

    let text = res.text().await.unwrap();
    assert!(text.starts_with(r#"{"response":{"version":"1.0","status":0,"#));

    let body: Value = serde_json::from_str(&text).unwrap();
    let response = &body["response"];
    assert_eq!(response["q"], "rust");
    assert_eq!(response["page_size"], 5);
    assert_eq!(response["record_count"], 1);
    assert_eq!(response["result"][0]["title"], "Rust テスト");
}

#[tokio::test]
async fn test_search_wraps_jsonp_when_enabled() {
    let mut config = test_config();
    config.api.jsonp_enabled = true;
    let server = start_server(config, Arc::new(EmptySearchEngine)).await;

    let text = client()
        .get(server.url("/json?q=rust&callback=cb"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(text.starts_with(r#"/**/cb({"response":{"version":"1.0","status":0,"#));
    assert!(text.ends_with("})"));

    let inner = &text["/**/cb(".len()..text.len() - 1];
    let body: Value = serde_json::from_str(inner).unwrap();
    assert_eq!(body["response"]["record_count"], 0);
}

#[tokio::test]
async fn test_jsonp_callback_is_sanitized() {
    let mut config = test_config();
    config.api.jsonp_enabled = true;
    let server = start_server(config, Arc::new(EmptySearchEngine)).await;

    let text = client()
        .get(server.url("/json?callback=my%3Cscript%3Ex%3C%2Fscript%3E"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(text.starts_with("/**/myscriptx({"));
}

#[tokio::test]
async fn test_engine_sees_normalized_params() {
    let engine = Arc::new(ScriptedEngine::returning(SearchResult::default()));
    let server = start_server(test_config(), engine.clone()).await;

    client()
        .get(server.url("/json?q=a+b&num=150&start=invalid&ex_q=extra1&ex_q=extra2"))
        .header("x-request-id", "req-7")
        .send()
        .await
        .unwrap();

    let seen = engine.seen.lock().unwrap().clone().expect("engine not called");
    assert_eq!(seen.query.as_deref(), Some("a b"));
    assert_eq!(seen.page_size, Some(100));
    assert_eq!(seen.start, Some(0));
    assert_eq!(seen.extra_queries, ["extra1", "extra2"]);
    assert_eq!(seen.request_id.as_deref(), Some("req-7"));
}

#[tokio::test]
async fn test_auth_failure_returns_challenge() {
    let engine = ScriptedEngine::failing(|| {
        ApiError::invalid_access_token("expired_token", "access token has expired")
    });
    let server = start_server(test_config(), Arc::new(engine)).await;

    let res = client().get(server.url("/json?q=rust")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.headers()["www-authenticate"],
        "Bearer error=\"expired_token\""
    );

    let body: Value = res.json().await.unwrap();
    assert_ne!(body["response"]["status"], 0);
    let message = body["response"]["message"].as_str().unwrap();
    assert!(message.starts_with("error_code:"));
    assert!(!message.contains("expired"));
}

#[tokio::test]
async fn test_failure_detail_when_included() {
    let mut config = test_config();
    config.api.exception_included = true;
    let engine = ScriptedEngine::failing(|| {
        ApiError::search_with_source(
            "search failed",
            std::io::Error::new(std::io::ErrorKind::TimedOut, "shard timed out"),
        )
    });
    let server = start_server(config, Arc::new(engine)).await;

    let res = client().get(server.url("/json?q=rust")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["response"]["status"], 1);
    let message = body["response"]["message"].as_str().unwrap();
    assert!(message.starts_with("search failed [ "));
    assert!(message.contains("shard timed out"));
}

#[tokio::test]
async fn test_suggest_endpoint() {
    let server = start_server(test_config(), Arc::new(ScriptedEngine::returning(SearchResult::default()))).await;

    let body: Value = client()
        .get(server.url("/suggest?query=ru&fields=title,content&num=abc&lang=en"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let response = &body["response"];
    assert_eq!(response["status"], 0);
    assert_eq!(response["query"], "ru");
    assert_eq!(response["num"], 10);
    assert_eq!(response["record_count"], 2);
    assert_eq!(response["result"][0]["text"], "title:ru");
    assert_eq!(response["result"][1]["text"], "content:ru");
}

#[tokio::test]
async fn test_suggest_unsupported_capability_is_encoded() {
    let mut config = test_config();
    config.api.exception_included = true;
    let server = start_server(config, Arc::new(ScriptedEngine::returning(SearchResult::default()))).await;

    let body: Value = client()
        .get(server.url("/suggest?query=ru&tags=sorted"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["response"]["status"], 1);
    let message = body["response"]["message"].as_str().unwrap();
    assert!(message.contains("unsupported capability for suggest requests: sort"));
}

#[tokio::test]
async fn test_slow_engine_hits_request_timeout() {
    let mut config = test_config();
    config.timeouts.request_secs = 1;
    let engine = SlowEngine {
        delay: Duration::from_secs(3),
    };
    let server = start_server(config, Arc::new(engine)).await;

    let started = Instant::now();
    let res = client()
        .get(server.url("/json?q=slow"))
        .send()
        .await
        .expect("server unreachable");

    assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    assert!(started.elapsed() < Duration::from_millis(2500));
}
