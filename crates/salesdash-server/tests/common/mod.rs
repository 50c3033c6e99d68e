use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use salesdash_core::{MemoryStore, RecordStore, SaleRecord};
use salesdash_server::AppState;
use salesdash_store::SqliteStore;
use serde_json::Value;
use tempfile::TempDir;

#[allow(dead_code)]
pub fn sale(id: i64, title: &str, date: &str, price: f64, category: &str, sold: bool) -> SaleRecord {
    SaleRecord {
        id,
        title: title.to_string(),
        price,
        description: format!("Description of {title}"),
        category: category.to_string(),
        image: format!("https://img.test/{id}.jpg"),
        sold,
        date_of_sale: DateTime::parse_from_rfc3339(date)
            .unwrap()
            .with_timezone(&Utc),
    }
}

/// Three March sales plus one April sale
#[allow(dead_code)]
pub fn dashboard_records() -> Vec<SaleRecord> {
    vec![
        sale(1, "Gold Watch", "2022-03-05T10:00:00Z", 99.99, "jewelery", true),
        sale(2, "Cotton Shirt", "2022-03-10T10:00:00Z", 25.0, "men's clothing", false),
        sale(3, "Laptop", "2022-03-20T10:00:00Z", 950.0, "electronics", true),
        sale(4, "Backpack", "2022-04-02T10:00:00Z", 150.0, "men's clothing", false),
    ]
}

#[allow(dead_code)]
pub fn memory_state(records: Vec<SaleRecord>, seed_url: &str) -> Arc<AppState> {
    let store: Arc<dyn RecordStore> = Arc::new(MemoryStore::with_records(records));
    Arc::new(AppState::new(store, seed_url, Duration::from_secs(30)))
}

#[allow(dead_code)]
pub fn sqlite_state(records: Vec<SaleRecord>) -> (TempDir, Arc<AppState>) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(dir.path().join("store.db")).unwrap();
    store.replace_all(records).unwrap();
    let state = AppState::new(Arc::new(store), "http://127.0.0.1:9/unused", Duration::from_secs(30));
    (dir, Arc::new(state))
}

#[allow(dead_code)]
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub fn post_request(uri: &str) -> Request<Body> {
    Request::builder().method("POST").uri(uri).body(Body::empty()).unwrap()
}

#[allow(dead_code)]
pub async fn json_body(resp: Response<Body>) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).expect("valid JSON response");
    (status, json)
}

/// Stand-in upstream feed on an ephemeral local port
#[allow(dead_code)]
pub async fn serve_feed() -> SocketAddr {
    let feed = serde_json::json!([
        {
            "id": 10, "title": "Fjallraven Backpack", "price": 329.85,
            "description": "Your perfect pack", "category": "men's clothing",
            "image": "https://img.test/10.jpg", "sold": false,
            "dateOfSale": "2021-11-27T20:29:54+05:30"
        },
        {
            "id": 11, "title": "Mens Casual T-Shirt", "price": "22.3",
            "description": "Slim-fitting style", "category": "men's clothing",
            "image": "https://img.test/11.jpg", "sold": true,
            "dateOfSale": "2021-03-27T20:29:54+05:30"
        }
    ])
    .to_string();

    let app = Router::new()
        .route(
            "/feed.json",
            get(move || {
                let feed = feed.clone();
                async move { feed }
            }),
        )
        .route(
            "/missing.json",
            get(|| async { (StatusCode::NOT_FOUND, "gone") }),
        )
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "[]"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}
