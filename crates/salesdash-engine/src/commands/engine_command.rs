//! Engine-level commands that write to the store.

#![allow(clippy::result_large_err)]

use std::path::PathBuf;
use std::time::Instant;

use salesdash_core::errors::Result;
use salesdash_core::{log_op_end, log_op_error, log_op_start, RecordStore, SaleRecord};
use salesdash_store::seed::{import_file, import_records};

/// Commands that replace the store's contents.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Replace everything with already fetched and validated records.
    ReplaceRecords {
        records: Vec<SaleRecord>,
        /// Where the records came from, for logging
        source: String,
    },
    /// Parse a local feed file and replace everything with it.
    ImportFile { path: PathBuf },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    /// The store now holds exactly `records` records.
    Replaced { records: usize },
}

/// Apply a command to `store`.
///
/// Either the whole new collection is in place afterwards or the store is
/// unchanged.
///
/// # Errors
///
/// Returns `Io`/`ExternalService` for an unreadable or malformed feed file
/// and `Persistence` when the store fails.
pub fn apply_engine_command(cmd: EngineCommand, store: &dyn RecordStore) -> Result<EngineCommandResult> {
    log_op_start!("reseed");
    let start = Instant::now();

    let result = match cmd {
        EngineCommand::ReplaceRecords { records, source } => {
            import_records(store, records, &source)
        }
        EngineCommand::ImportFile { path } => import_file(store, &path),
    }
    .map(|records| EngineCommandResult::Replaced { records });

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(EngineCommandResult::Replaced { records }) => {
            log_op_end!("reseed", duration_ms = elapsed, record_count = *records);
        }
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!("reseed", e_clone, duration_ms = elapsed);
        }
    }
    result
}
