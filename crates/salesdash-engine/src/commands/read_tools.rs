//! Result types for the read-only query surface.
//!
//! Plain data containers with no I/O. Field names follow the dashboard's
//! JSON contract.

use salesdash_core::analytics::{CategoryCount, PriceRangeCount, SaleStatistics};
use salesdash_core::SaleRecord;
use serde::{Deserialize, Serialize};

/// One page of the transactions listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPage {
    pub transactions: Vec<SaleRecord>,
    /// Matches before pagination
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Listing plus all three analytics views for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedData {
    pub transactions: TransactionPage,
    pub statistics: SaleStatistics,
    pub bar_chart: Vec<PriceRangeCount>,
    pub pie_chart: Vec<CategoryCount>,
}
