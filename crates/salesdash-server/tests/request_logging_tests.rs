#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use salesdash_core::core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use salesdash_core::logging_facility::init_test_capture;
use salesdash_server::build_router;
use tower::ServiceExt;

use common::{dashboard_records, memory_state};

fn with_request_id(method: &str, uri: &str, request_id: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("x-request-id", request_id)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_engine_events_carry_request_id() {
    let capture = init_test_capture();
    let app = build_router(memory_state(dashboard_records(), "http://127.0.0.1:9/unused"));

    // When a statistics request arrives with an id
    let resp = app
        .oneshot(with_request_id("GET", "/api/statistics?month=3", "log-req-42"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // Then the engine's events, emitted on the blocking pool, are tied to it
    let events = capture.events_for_request("log-req-42");
    let has = |event: &str| {
        events
            .iter()
            .any(|e| e.op.as_deref() == Some("statistics") && e.event.as_deref() == Some(event))
    };
    assert!(has(EVENT_START));
    assert!(has(EVENT_END));
}

#[tokio::test]
async fn test_rejected_request_never_reaches_engine() {
    let capture = init_test_capture();
    let app = build_router(memory_state(dashboard_records(), "http://127.0.0.1:9/unused"));

    let resp = app
        .oneshot(with_request_id("GET", "/api/bar-chart?month=13", "log-req-bad"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let engine_events = capture
        .events_for_request("log-req-bad")
        .into_iter()
        .filter(|e| e.op.as_deref() == Some("bar_chart"))
        .count();
    assert_eq!(engine_events, 0);
}

#[tokio::test]
async fn test_failed_reseed_logs_end_error() {
    let capture = init_test_capture();
    let app = build_router(memory_state(dashboard_records(), "http://127.0.0.1:9/feed.json"));

    // When the upstream feed cannot be reached
    let resp = app
        .oneshot(with_request_id("POST", "/api/initialize", "log-req-seed"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Then the fetch failure is logged against the request
    let events = capture.events_for_request("log-req-seed");
    let failure = events
        .iter()
        .find(|e| e.op.as_deref() == Some("seed_fetch") && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("seed_fetch end_error event");
    assert_eq!(failure.field("err_code"), Some("ERR_EXTERNAL_SERVICE"));
}
