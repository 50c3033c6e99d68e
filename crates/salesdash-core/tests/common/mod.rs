use chrono::{DateTime, Utc};
use salesdash_core::SaleRecord;

/// Build a record dated at an RFC 3339 timestamp
#[allow(dead_code)]
pub fn sale(id: i64, date: &str, price: f64, category: &str, sold: bool) -> SaleRecord {
    SaleRecord {
        id,
        title: format!("Product {id}"),
        price,
        description: format!("Description of product {id}"),
        category: category.to_string(),
        image: format!("https://img.test/{id}.jpg"),
        sold,
        date_of_sale: DateTime::parse_from_rfc3339(date)
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// Same as [`sale`] with explicit title and description
#[allow(dead_code)]
pub fn titled_sale(id: i64, date: &str, title: &str, description: &str, price: f64) -> SaleRecord {
    let mut record = sale(id, date, price, "general", false);
    record.title = title.to_string();
    record.description = description.to_string();
    record
}

/// `n` March records with ids 1..=n, prices 10.0, 20.0, … and alternating sold
#[allow(dead_code)]
pub fn march_records(n: i64) -> Vec<SaleRecord> {
    (1..=n)
        .map(|i| {
            let day = (i % 28) + 1;
            sale(
                i,
                &format!("2022-03-{day:02}T08:00:00Z"),
                (i * 10) as f64,
                if i % 3 == 0 { "electronics" } else { "clothing" },
                i % 2 == 0,
            )
        })
        .collect()
}
