#![allow(clippy::unwrap_used, clippy::expect_used)]

use salesdash_core::errors::DashError;
use salesdash_core::logging_facility::{init, init_test_capture, Profile};
use salesdash_core::{log_op_end, log_op_error, log_op_start};
use salesdash_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use tracing::Level;

#[test]
fn test_start_carries_query_fields() {
    let capture = init_test_capture();

    // Given a listing operation that logs its month and search
    log_op_start!("lf_transactions", month = 3, search = "bag");

    // Then the start event keeps the caller's module as component
    let events = capture.events_for_op("lf_transactions");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_START));
    assert_eq!(events[0].field("month"), Some("3"));
    assert_eq!(events[0].field("search"), Some("bag"));
    assert_eq!(events[0].field("component"), Some("logging_facility_tests"));
}

#[test]
fn test_end_carries_duration_and_counts() {
    let capture = init_test_capture();

    log_op_end!("lf_seed_import", duration_ms = 42, record_count = 60_usize);

    let events = capture.events_for_op("lf_seed_import");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].level, Level::INFO);
    assert_eq!(events[0].field("duration_ms"), Some("42"));
    assert_eq!(events[0].field("record_count"), Some("60"));
}

#[test]
fn test_error_event_classifies_domain_error() {
    let capture = init_test_capture();

    // When a fetch timeout is logged
    log_op_error!(
        "lf_seed_fetch",
        DashError::FetchTimeout {
            url: "http://feed.test".to_string(),
            secs: 30,
        },
        duration_ms = 30_000
    );

    // Then the event is an error carrying the stable code and the message
    let events = capture.events_for_op("lf_seed_fetch");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].field("err_code"), Some("ERR_TIMEOUT"));
    assert!(events[0].field("message").unwrap().contains("timed out"));
}

#[test]
fn test_test_profile_routes_into_capture() {
    // Given the Test profile initialized after (or before) the capture handle
    init(Profile::Test);
    let capture = init_test_capture();

    log_op_start!("lf_profile");
    log_op_end!("lf_profile", duration_ms = 1);

    capture.assert_event_exists("lf_profile", EVENT_START);
    capture.assert_event_exists("lf_profile", EVENT_END);
    assert_eq!(
        capture.count_events(|e| e.op.as_deref() == Some("lf_profile")),
        2
    );
}
