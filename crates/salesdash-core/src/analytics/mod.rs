//! Month analytics built on store aggregates
//!
//! Each view asks the store for grouped reductions over one month and shapes
//! the result for the dashboard. Nothing here scans records directly, so the
//! same code serves every backend.

pub mod categories;
pub mod histogram;
pub mod price_range;
pub mod statistics;

pub use categories::{category_breakdown, CategoryCount};
pub use histogram::{price_histogram, PriceRangeCount};
pub use price_range::{bucket_index, PriceRange, PRICE_RANGES};
pub use statistics::{sale_statistics, SaleStatistics};

/// Round to two decimal places
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
