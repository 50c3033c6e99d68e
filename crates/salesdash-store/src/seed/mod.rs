//! Seed feed ingestion
//!
//! Provides:
//! - JSON feed parser with record validation
//! - Remote fetch with a bounded timeout
//! - Importer that replaces a store's contents with a parsed feed

pub mod fetch;
pub mod importer;
pub mod parser;

pub use fetch::{
    fetch_feed, fetch_feed_with_limit, DEFAULT_FEED_URL, DEFAULT_FETCH_TIMEOUT, MAX_FEED_BYTES,
};
pub use importer::{import_file, import_records};
pub use parser::{parse_feed_bytes, parse_feed_file, parse_feed_str};
