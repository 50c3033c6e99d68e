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

/// A small feed in the upstream wire format
#[allow(dead_code)]
pub fn sample_feed_json() -> String {
    serde_json::json!([
        {
            "id": 1, "title": "Fjallraven Backpack", "price": 329.85,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing", "image": "https://img.test/1.jpg",
            "sold": false, "dateOfSale": "2021-11-27T20:29:54+05:30"
        },
        {
            "id": 2, "title": "Mens Casual T-Shirt", "price": "22.3",
            "description": "Slim-fitting style",
            "category": "men's clothing", "image": "https://img.test/2.jpg",
            "sold": true, "dateOfSale": "2021-10-27T20:29:54+05:30"
        },
        {
            "id": 3, "title": "Solid Gold Petite Micropave", "price": 168,
            "description": "Satisfaction guaranteed",
            "category": null, "image": "https://img.test/3.jpg",
            "sold": true, "dateOfSale": "2022-03-01T00:10:00Z"
        }
    ])
    .to_string()
}
