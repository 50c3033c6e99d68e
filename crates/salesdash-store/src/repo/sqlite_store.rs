//! SQLite-backed record store

#![allow(clippy::result_large_err)]

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::{params_from_iter, Connection, Row};
use salesdash_core::ops::{
    FoundPage, GroupKey, GroupValue, RecordStore, Reduced, Reducer, SortOrder, Window,
};
use salesdash_core::{Filter, Month, SaleRecord};

use crate::db;
use crate::errors::{from_rusqlite, lock_poisoned, Result};
use crate::migrations::apply_migrations;
use crate::repo::filter_sql::{compile, group_expr};

const SELECT_COLUMNS: &str =
    "SELECT id, title, description, price, category, sold, date_of_sale, image FROM sale_records";

/// `RecordStore` over a single SQLite connection
///
/// All access goes through one connection behind a mutex, so a reseed
/// transaction and a read never interleave.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a database file and bring its schema up to date
    ///
    /// # Errors
    ///
    /// Returns `Io` if the parent directory cannot be created and
    /// `Persistence` if opening or migrating fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        Self::from_connection(conn)
    }

    /// Private in-memory database
    ///
    /// # Errors
    ///
    /// Returns `Persistence` if SQLite cannot be initialized.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self, op: &str) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| lock_poisoned(op))
    }
}

fn order_clause(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::DateOfSaleDesc => "ORDER BY date_of_sale DESC, id ASC, row_id ASC",
        SortOrder::Insertion => "ORDER BY row_id ASC",
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn conversion_error(column: usize, ty: Type, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, ty, message.into())
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<SaleRecord> {
    let millis: i64 = row.get(6)?;
    let date_of_sale = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
        conversion_error(6, Type::Integer, format!("date_of_sale {} out of range", millis))
    })?;

    Ok(SaleRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        category: row.get(4)?,
        sold: row.get(5)?,
        date_of_sale,
        image: row.get(7)?,
    })
}

fn select_records(
    conn: &Connection,
    filter: &Filter,
    window: Window,
    sort: SortOrder,
) -> Result<Vec<SaleRecord>> {
    let mut params = Vec::new();
    let condition = compile(filter, &mut params);
    params.push(Value::Integer(window.limit.map(to_sql_int).unwrap_or(-1)));
    params.push(Value::Integer(to_sql_int(window.skip)));

    let sql = format!(
        "{} WHERE {} {} LIMIT ? OFFSET ?",
        SELECT_COLUMNS,
        condition,
        order_clause(sort)
    );

    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params_from_iter(params), record_from_row)
        .map_err(from_rusqlite)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

fn count_records(conn: &Connection, filter: &Filter) -> Result<u64> {
    let mut params = Vec::new();
    let condition = compile(filter, &mut params);
    let sql = format!("SELECT COUNT(*) FROM sale_records WHERE {}", condition);

    let count: i64 = conn
        .query_row(&sql, params_from_iter(params), |row| row.get(0))
        .map_err(from_rusqlite)?;
    Ok(u64::try_from(count).unwrap_or(0))
}

fn reduced_from_row(row: &Row<'_>, reducer: Reducer) -> rusqlite::Result<Reduced> {
    let count = |column: usize| -> rusqlite::Result<u64> {
        let n: i64 = row.get(column)?;
        Ok(u64::try_from(n).unwrap_or(0))
    };
    Ok(match reducer {
        Reducer::Count => Reduced::Count(count(1)?),
        Reducer::SumPrice => Reduced::Sum(row.get(1)?),
        Reducer::CountAndSumPrice => Reduced::Tally {
            count: count(1)?,
            sum: row.get(2)?,
        },
    })
}

fn group_from_row(row: &Row<'_>, key: GroupKey) -> rusqlite::Result<GroupValue> {
    Ok(match key {
        GroupKey::Category => GroupValue::Category(row.get(0)?),
        GroupKey::Sold => GroupValue::Sold(row.get(0)?),
        GroupKey::PriceRange => {
            let index: i64 = row.get(0)?;
            let index = usize::try_from(index).map_err(|_| {
                conversion_error(0, Type::Integer, format!("price range index {}", index))
            })?;
            GroupValue::PriceRange(index)
        }
    })
}

impl RecordStore for SqliteStore {
    fn replace_all(&self, records: Vec<SaleRecord>) -> Result<usize> {
        let mut conn = self.lock("replace_all")?;
        let tx = conn.transaction().map_err(from_rusqlite)?;

        tx.execute("DELETE FROM sale_records", [])
            .map_err(from_rusqlite)?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO sale_records
                        (id, title, description, price, category, sold, date_of_sale, month, image)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                )
                .map_err(from_rusqlite)?;

            for record in &records {
                stmt.execute(rusqlite::params![
                    record.id,
                    record.title,
                    record.description,
                    record.price,
                    record.category,
                    record.sold,
                    record.date_of_sale.timestamp_millis(),
                    record.month().number(),
                    record.image,
                ])
                .map_err(from_rusqlite)?;
            }
        }

        // Dropping an uncommitted transaction rolls back, leaving the old set
        tx.commit().map_err(from_rusqlite)?;
        Ok(records.len())
    }

    fn find(&self, filter: &Filter, window: Window, sort: SortOrder) -> Result<Vec<SaleRecord>> {
        let conn = self.lock("find")?;
        select_records(&conn, filter, window, sort)
    }

    fn find_page(&self, filter: &Filter, window: Window, sort: SortOrder) -> Result<FoundPage> {
        let mut conn = self.lock("find_page")?;
        // A read transaction also pins the snapshot against writers in
        // other processes sharing the file
        let tx = conn.transaction().map_err(from_rusqlite)?;
        let total = count_records(&tx, filter)?;
        let records = select_records(&tx, filter, window, sort)?;
        tx.commit().map_err(from_rusqlite)?;
        Ok(FoundPage { records, total })
    }

    fn count(&self, filter: &Filter) -> Result<u64> {
        let conn = self.lock("count")?;
        count_records(&conn, filter)
    }

    fn aggregate_by_month(
        &self,
        month: Month,
        key: GroupKey,
        reducer: Reducer,
    ) -> Result<BTreeMap<GroupValue, Reduced>> {
        let reduction = match reducer {
            Reducer::Count => "COUNT(*)",
            Reducer::SumPrice => "TOTAL(price)",
            Reducer::CountAndSumPrice => "COUNT(*), TOTAL(price)",
        };
        let sql = format!(
            "SELECT {} AS grp, {} FROM sale_records WHERE month = ?1 GROUP BY grp",
            group_expr(key),
            reduction
        );

        let conn = self.lock("aggregate_by_month")?;
        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([month.number()], |row| {
                Ok((group_from_row(row, key)?, reduced_from_row(row, reducer)?))
            })
            .map_err(from_rusqlite)?
            .collect::<rusqlite::Result<BTreeMap<_, _>>>()
            .map_err(from_rusqlite)?;
        Ok(rows)
    }
}
