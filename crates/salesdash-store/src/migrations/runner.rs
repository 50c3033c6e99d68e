#![allow(clippy::result_large_err)]

use rusqlite::{Connection, OptionalExtension, Transaction};

use super::{Migration, MIGRATIONS};
use crate::errors::{checksum_mismatch, from_rusqlite, migration_error, Result};

const CREATE_LEDGER: &str = "CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    migration_id TEXT NOT NULL UNIQUE,
    applied_at INTEGER NOT NULL,
    checksum TEXT
)";

/// Bring the schema up to date
///
/// # Errors
///
/// Returns `Persistence` when a migration's SQL fails or when an applied
/// migration's recorded checksum differs from the embedded SQL.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(CREATE_LEDGER).map_err(from_rusqlite)?;

    let mut applied = 0_usize;
    for migration in MIGRATIONS {
        let tx = conn.transaction().map_err(from_rusqlite)?;
        if apply_one(&tx, migration)? {
            tx.commit().map_err(from_rusqlite)?;
            applied += 1;
        }
    }

    if applied > 0 {
        tracing::debug!(applied, "schema migrated");
    }
    Ok(())
}

/// Returns `false` when the migration was already recorded
fn apply_one(tx: &Transaction<'_>, migration: &Migration) -> Result<bool> {
    let checksum = migration.checksum();

    let recorded: Option<Option<String>> = tx
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = ?1",
            [migration.id],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    match recorded {
        Some(Some(stored)) if stored != checksum => {
            Err(checksum_mismatch(migration.id, &stored, &checksum))
        }
        Some(_) => Ok(false),
        None => {
            tx.execute_batch(migration.sql)
                .map_err(|e| migration_error(migration.id, &e.to_string()))?;
            tx.execute(
                "INSERT INTO schema_version (migration_id, applied_at, checksum)
                 VALUES (?1, ?2, ?3)",
                rusqlite::params![migration.id, chrono::Utc::now().timestamp(), checksum],
            )
            .map_err(from_rusqlite)?;
            Ok(true)
        }
    }
}
