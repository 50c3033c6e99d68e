#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use salesdash_core::analytics::{price_histogram, sale_statistics};
use salesdash_core::ops::{SortOrder, Window};
use salesdash_core::{Filter, ListingRequest, MemoryStore, Month, RecordStore, SaleRecord};

use common::{march_records, sale, titled_sale};

fn march() -> Month {
    Month::new(3).unwrap()
}

#[test]
fn test_month_filter_ignores_year() {
    // Given records in March of different years and one in April
    let store = MemoryStore::with_records(vec![
        sale(1, "2021-03-10T00:00:00Z", 10.0, "a", true),
        sale(2, "2022-03-10T00:00:00Z", 10.0, "a", true),
        sale(3, "2022-04-10T00:00:00Z", 10.0, "a", true),
    ]);

    // When counting March
    let count = store.count(&Filter::MonthEq(march())).unwrap();

    // Then both March records match
    assert_eq!(count, 2);
}

#[test]
fn test_search_matches_title_description_or_exact_price() {
    // Given March records with varied text and prices
    let store = MemoryStore::with_records(vec![
        titled_sale(1, "2022-03-01T00:00:00Z", "Leather Bag", "brown", 50.0),
        titled_sale(2, "2022-03-02T00:00:00Z", "Shoes", "fits a BAG lover", 60.0),
        titled_sale(3, "2022-03-03T00:00:00Z", "Watch", "steel", 99.99),
        titled_sale(4, "2022-03-04T00:00:00Z", "Gold Watch", "gold", 199.99),
    ]);

    // When searching for "bag"
    let mut request = ListingRequest::for_month(march());
    request.search = "bag".to_string();
    let bags = store
        .find(&request.filter(), request.window(), SortOrder::DateOfSaleDesc)
        .unwrap();

    // Then title and description matches are returned, newest first
    assert_eq!(bags.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);

    // When searching for a price
    request.search = "99.99".to_string();
    let priced = store
        .find(&request.filter(), request.window(), SortOrder::DateOfSaleDesc)
        .unwrap();

    // Then only the exact price matches; 199.99 does not match by substring
    assert_eq!(priced.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);
}

#[test]
fn test_search_text_is_literal() {
    // Given a record whose title contains wildcard-like characters
    let store = MemoryStore::with_records(vec![
        titled_sale(1, "2022-03-01T00:00:00Z", "100% cotton_shirt", "", 5.0),
        titled_sale(2, "2022-03-01T00:00:00Z", "1000 cottonshirt", "", 5.0),
    ]);

    // When searching for "0% cotton_"
    let mut request = ListingRequest::for_month(march());
    request.search = "0% cotton_".to_string();

    // Then only the literal match is returned
    assert_eq!(store.count(&request.filter()).unwrap(), 1);
}

#[test]
fn test_page_past_end_is_empty() {
    // Given 25 March records
    let store = MemoryStore::with_records(march_records(25));

    // When requesting page 4 of 10
    let mut request = ListingRequest::for_month(march());
    request.page = 4;
    let page = store
        .find(&request.filter(), request.window(), SortOrder::DateOfSaleDesc)
        .unwrap();

    // Then the page is empty but the total is unaffected
    assert!(page.is_empty());
    assert_eq!(store.count(&request.filter()).unwrap(), 25);
}

#[test]
fn test_twenty_five_records_with_one_sold_at_150() {
    // Given 25 March records, one of which sold at 150.00
    let mut records: Vec<SaleRecord> = (1..=24)
        .map(|i| sale(i, "2022-03-05T00:00:00Z", 10.0, "misc", false))
        .collect();
    records.push(sale(25, "2022-03-06T00:00:00Z", 150.0, "misc", true));
    let store = MemoryStore::with_records(records);

    // When computing analytics
    let stats = sale_statistics(&store, march()).unwrap();
    let histogram = price_histogram(&store, march()).unwrap();

    // Then the sale lands in 101-200 and in the sale amount
    assert_eq!(stats.total_sale_amount, 150.0);
    assert_eq!(stats.total_sold_items, 1);
    assert_eq!(stats.total_not_sold_items, 24);
    let bar = histogram.iter().find(|b| b.range == "101-200").unwrap();
    assert_eq!(bar.count, 1);
    assert_eq!(histogram[0].count, 24);
}

#[test]
fn test_replace_all_is_total() {
    // Given a populated store
    let store = MemoryStore::with_records(march_records(10));

    // When reseeding with a single April record
    store
        .replace_all(vec![sale(99, "2022-04-01T00:00:00Z", 1.0, "x", true)])
        .unwrap();

    // Then nothing from the old set remains
    assert_eq!(store.count(&Filter::MonthEq(march())).unwrap(), 0);
    assert_eq!(store.record_count().unwrap(), 1);
}

fn arb_record() -> impl Strategy<Value = SaleRecord> {
    (
        0i64..50,
        1u32..=12,
        1u32..=28,
        0u32..86_400,
        0u32..120_000,
        prop::sample::select(vec!["", "electronics", "jewelery", "men's clothing"]),
        any::<bool>(),
        "[a-zA-Z ]{0,12}",
    )
        .prop_map(|(id, month, day, secs, cents, category, sold, title)| SaleRecord {
            id,
            title,
            price: f64::from(cents) / 100.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            sold,
            date_of_sale: Utc
                .with_ymd_and_hms(2022, month, day, 0, 0, 0)
                .unwrap()
                + chrono::Duration::seconds(i64::from(secs)),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_count_matches_unbounded_find(records in prop::collection::vec(arb_record(), 0..60), m in 1u32..=12) {
        let store = MemoryStore::with_records(records);
        let filter = Filter::MonthEq(Month::new(m).unwrap());
        let found = store.find(&filter, Window::unbounded(), SortOrder::DateOfSaleDesc).unwrap();
        prop_assert_eq!(store.count(&filter).unwrap(), found.len() as u64);
    }

    #[test]
    fn proptest_histogram_and_statistics_cover_month(records in prop::collection::vec(arb_record(), 0..60), m in 1u32..=12) {
        let store = MemoryStore::with_records(records);
        let month = Month::new(m).unwrap();
        let total = store.count(&Filter::MonthEq(month)).unwrap();

        let histogram = price_histogram(&store, month).unwrap();
        prop_assert_eq!(histogram.len(), 10);
        prop_assert_eq!(histogram.iter().map(|b| b.count).sum::<u64>(), total);

        let stats = sale_statistics(&store, month).unwrap();
        prop_assert_eq!(stats.total_sold_items + stats.total_not_sold_items, total);
    }

    #[test]
    fn proptest_pages_slice_sorted_sequence(records in prop::collection::vec(arb_record(), 0..60), page in 1u64..8, per_page in 1u64..12) {
        let store = MemoryStore::with_records(records);
        let filter = Filter::MonthEq(march());
        let all = store.find(&filter, Window::unbounded(), SortOrder::DateOfSaleDesc).unwrap();
        let slice = store.find(&filter, Window::page(page, per_page), SortOrder::DateOfSaleDesc).unwrap();

        let start = ((page - 1) * per_page) as usize;
        let expected: Vec<SaleRecord> = all.into_iter().skip(start).take(per_page as usize).collect();
        prop_assert_eq!(slice, expected);
    }

    #[test]
    fn proptest_sorted_newest_first(records in prop::collection::vec(arb_record(), 0..60)) {
        let store = MemoryStore::with_records(records);
        let all = store.find(&Filter::all(), Window::unbounded(), SortOrder::DateOfSaleDesc).unwrap();
        for pair in all.windows(2) {
            prop_assert!(
                pair[0].date_of_sale > pair[1].date_of_sale
                    || (pair[0].date_of_sale == pair[1].date_of_sale && pair[0].id <= pair[1].id)
            );
        }
    }
}
