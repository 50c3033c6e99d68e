//! SalesDash Store - SQLite persistence, migrations and seed feed ingestion
//!
//! Provides:
//! - A `RecordStore` backed by SQLite with embedded, checksummed migrations
//! - Seed feed parsing and validation
//! - Remote feed fetch with a bounded timeout
//! - Bulk import into any `RecordStore`

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
