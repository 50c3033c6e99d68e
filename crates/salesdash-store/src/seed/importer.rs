//! Seed importer orchestration

#![allow(clippy::result_large_err)]

use std::path::Path;
use std::time::Instant;

use salesdash_core::{log_op_end, log_op_error, log_op_start, RecordStore, SaleRecord};

use crate::errors::Result;
use crate::seed::parser::parse_feed_file;

/// Replace the store's contents with already-parsed records
///
/// `source` only labels the log events.
///
/// # Errors
///
/// Returns `Persistence` if the store rejects the replacement; the previous
/// contents are kept.
pub fn import_records(
    store: &dyn RecordStore,
    records: Vec<SaleRecord>,
    source: &str,
) -> Result<usize> {
    log_op_start!("seed_import", source = source, record_count = records.len());
    let start = Instant::now();

    let result = store.replace_all(records);
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(count) => {
            log_op_end!("seed_import", duration_ms = duration_ms, record_count = *count);
        }
        Err(e) => {
            log_op_error!("seed_import", e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

/// Import a local feed file
///
/// The file is parsed and validated in full before the store is touched.
///
/// # Errors
///
/// Returns `Io` for an unreadable file, `ExternalService` for a malformed
/// feed, and `Persistence` if the store fails.
pub fn import_file(store: &dyn RecordStore, path: &Path) -> Result<usize> {
    let records = parse_feed_file(path)?;
    import_records(store, records, &path.display().to_string())
}
