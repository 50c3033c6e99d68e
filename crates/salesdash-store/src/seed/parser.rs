//! Seed feed parser with validation
//!
//! The feed is a JSON array of sale-record objects. Parsing is all or
//! nothing: one bad record rejects the whole feed.

#![allow(clippy::result_large_err)]

use std::fs;
use std::path::Path;

use salesdash_core::rules::validation::validate_record;
use salesdash_core::SaleRecord;

use crate::errors::{io_error, malformed_feed, Result};

/// Parse a feed file from a path
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `ExternalService` if its
/// content is not a valid feed.
pub fn parse_feed_file(path: &Path) -> Result<Vec<SaleRecord>> {
    let content = fs::read(path).map_err(|e| io_error("seed_read", e))?;
    parse_feed_bytes(&content)
}

/// Parse a feed from a string
///
/// # Errors
///
/// Returns `ExternalService` if the content is not a valid feed.
pub fn parse_feed_str(content: &str) -> Result<Vec<SaleRecord>> {
    parse_feed_bytes(content.as_bytes())
}

/// Parse a feed from raw bytes, as received over HTTP
///
/// # Errors
///
/// Returns `ExternalService` if the bytes are not a JSON array of valid
/// sale records.
pub fn parse_feed_bytes(content: &[u8]) -> Result<Vec<SaleRecord>> {
    let records: Vec<SaleRecord> = serde_json::from_slice(content)
        .map_err(|e| malformed_feed(format!("JSON parse error: {}", e)))?;

    for record in &records {
        validate_record(record).map_err(|e| {
            malformed_feed(format!("record {}: {}", record.id, e.message())).with_source(e)
        })?;
    }

    Ok(records)
}
