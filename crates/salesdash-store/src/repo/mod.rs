//! Repository layer: the SQLite `RecordStore`

mod filter_sql;
pub mod sqlite_store;

pub use sqlite_store::SqliteStore;
