//! Forward-only schema migrations
//!
//! Each migration is applied once, inside its own transaction, and recorded
//! in `schema_version` along with the SHA-256 of its SQL. An applied
//! migration whose SQL has since changed is refused.

use sha2::{Digest, Sha256};

mod runner;

pub use runner::apply_migrations;

pub(crate) struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// Hex-encoded SHA-256 of the migration SQL
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.sql.as_bytes()))
    }
}

/// Every migration, in application order
pub(crate) const MIGRATIONS: &[Migration] = &[Migration {
    id: "001_sale_records",
    sql: include_str!("../../migrations/001_sale_records.sql"),
}];
