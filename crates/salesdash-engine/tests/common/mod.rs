use chrono::{DateTime, Utc};
use salesdash_core::{RecordStore, SaleRecord};
use salesdash_store::SqliteStore;
use tempfile::TempDir;

/// Build a record dated at an RFC 3339 timestamp
#[allow(dead_code)]
pub fn sale(id: i64, date: &str, price: f64, category: &str, sold: bool) -> SaleRecord {
    SaleRecord {
        id,
        title: format!("Product {id}"),
        price,
        description: format!("Description of product {id}"),
        category: category.to_string(),
        image: String::new(),
        sold,
        date_of_sale: DateTime::parse_from_rfc3339(date)
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// 25 March records: one sold at 150.00, the rest unsold at 10.00
#[allow(dead_code)]
pub fn march_fixture() -> Vec<SaleRecord> {
    let mut records: Vec<SaleRecord> = (1..=24)
        .map(|i| {
            sale(
                i,
                &format!("2022-03-{:02}T09:00:00Z", (i % 28) + 1),
                10.0,
                if i % 2 == 0 { "electronics" } else { "clothing" },
                false,
            )
        })
        .collect();
    records.push(sale(25, "2022-03-28T09:00:00Z", 150.0, "jewelery", true));
    records
}

/// A file-backed SQLite store seeded with `records`
#[allow(dead_code)]
pub fn sqlite_store(records: Vec<SaleRecord>) -> (TempDir, SqliteStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = SqliteStore::open(temp_dir.path().join("test.db")).unwrap();
    store.replace_all(records).unwrap();
    (temp_dir, store)
}
