#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::io::Write;

use salesdash_core::logging_facility::test_capture::init_test_capture;
use salesdash_core::{ExErrorKind, MemoryStore, RecordStore};
use salesdash_core_types::schema::{EVENT_END, EVENT_END_ERROR};
use salesdash_engine::{apply_engine_command, EngineCommand, EngineCommandResult};

use common::{march_fixture, sale, sqlite_store};

#[test]
fn test_replace_records_swaps_everything() {
    // Given a store with the March fixture
    let (_dir, store) = sqlite_store(march_fixture());

    // When replacing with two April records
    let result = apply_engine_command(
        EngineCommand::ReplaceRecords {
            records: vec![
                sale(1, "2022-04-01T00:00:00Z", 1.0, "a", true),
                sale(2, "2022-04-02T00:00:00Z", 2.0, "a", false),
            ],
            source: "test".to_string(),
        },
        &store,
    )
    .unwrap();

    // Then the store holds exactly the new records
    assert_eq!(result, EngineCommandResult::Replaced { records: 2 });
    assert_eq!(store.record_count().unwrap(), 2);
}

#[test]
fn test_import_file_command() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"[{"id":1,"title":"t","price":5,"description":"","category":"c","image":"",
             "sold":true,"dateOfSale":"2022-03-01T00:00:00Z"}]"#,
    )
    .unwrap();
    let store = MemoryStore::new();

    let result = apply_engine_command(
        EngineCommand::ImportFile {
            path: file.path().to_path_buf(),
        },
        &store,
    )
    .unwrap();

    assert_eq!(result, EngineCommandResult::Replaced { records: 1 });
}

#[test]
fn test_malformed_file_keeps_store_and_logs_error() {
    let capture = init_test_capture();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not json").unwrap();
    let store = MemoryStore::with_records(march_fixture());

    let err = apply_engine_command(
        EngineCommand::ImportFile {
            path: file.path().to_path_buf(),
        },
        &store,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ExternalService);
    assert_eq!(store.record_count().unwrap(), 25);
    capture.assert_event_exists("reseed", EVENT_END_ERROR);
}

#[test]
fn test_reseed_logs_end() {
    let capture = init_test_capture();
    let store = MemoryStore::new();

    apply_engine_command(
        EngineCommand::ReplaceRecords {
            records: march_fixture(),
            source: "fixture".to_string(),
        },
        &store,
    )
    .unwrap();

    capture.assert_event_exists("reseed", EVENT_END);
    capture.assert_event_exists("seed_import", EVENT_END);
}
