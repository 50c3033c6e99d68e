//! Engine-level read-only query surface.
//!
//! `apply_engine_query` is the single entry point for all read-only queries.
//! It takes a shared store reference and never writes.

#![allow(clippy::result_large_err)]

use std::time::Instant;

use salesdash_core::analytics::{
    category_breakdown, price_histogram, sale_statistics, CategoryCount, PriceRangeCount,
    SaleStatistics,
};
use salesdash_core::errors::Result;
use salesdash_core::ops::SortOrder;
use salesdash_core::{log_op_end, log_op_error, log_op_start, ListingRequest, Month, RecordStore};
use serde::Serialize;

use crate::commands::read_tools::TransactionPage;

// ---------------------------------------------------------------------------
// EngineQuery
// ---------------------------------------------------------------------------

/// Read-only queries supported by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineQuery {
    /// Paginated, optionally searched listing for a month.
    Transactions(ListingRequest),
    /// Sold amount and sold/unsold counts for a month.
    Statistics { month: Month },
    /// Ten-range price histogram for a month.
    BarChart { month: Month },
    /// Category breakdown for a month.
    PieChart { month: Month },
    /// Total number of stored records.
    RecordCount,
}

impl EngineQuery {
    /// Operation name used in log events
    pub fn op_name(&self) -> &'static str {
        match self {
            EngineQuery::Transactions(_) => "transactions",
            EngineQuery::Statistics { .. } => "statistics",
            EngineQuery::BarChart { .. } => "bar_chart",
            EngineQuery::PieChart { .. } => "pie_chart",
            EngineQuery::RecordCount => "record_count",
        }
    }

    fn month(&self) -> Option<Month> {
        match self {
            EngineQuery::Transactions(request) => Some(request.month),
            EngineQuery::Statistics { month }
            | EngineQuery::BarChart { month }
            | EngineQuery::PieChart { month } => Some(*month),
            EngineQuery::RecordCount => None,
        }
    }
}

// ---------------------------------------------------------------------------
// EngineQueryResult
// ---------------------------------------------------------------------------

/// All possible results from `apply_engine_query`.
///
/// Serializes as the bare payload of the variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineQueryResult {
    Transactions(TransactionPage),
    Statistics(SaleStatistics),
    BarChart(Vec<PriceRangeCount>),
    PieChart(Vec<CategoryCount>),
    RecordCount(u64),
}

// ---------------------------------------------------------------------------
// apply_engine_query
// ---------------------------------------------------------------------------

/// Run a read-only query against `store`.
///
/// # Errors
///
/// Returns `Persistence` (or `Concurrency`) when the store fails. Request
/// validation happens before a query is built, so no variant can fail on
/// input.
pub fn apply_engine_query(query: EngineQuery, store: &dyn RecordStore) -> Result<EngineQueryResult> {
    let op = query.op_name();
    if let Some(month) = query.month() {
        log_op_start!(op, month = month.number());
    } else {
        log_op_start!(op);
    }
    let start = Instant::now();

    let result = match query {
        EngineQuery::Transactions(request) => list_transactions(&request, store),
        EngineQuery::Statistics { month } => {
            sale_statistics(store, month).map(EngineQueryResult::Statistics)
        }
        EngineQuery::BarChart { month } => {
            price_histogram(store, month).map(EngineQueryResult::BarChart)
        }
        EngineQuery::PieChart { month } => {
            category_breakdown(store, month).map(EngineQueryResult::PieChart)
        }
        EngineQuery::RecordCount => store.record_count().map(EngineQueryResult::RecordCount),
    };

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(EngineQueryResult::Transactions(page)) => {
            log_op_end!(op, duration_ms = elapsed, total = page.total);
        }
        Ok(_) => {
            log_op_end!(op, duration_ms = elapsed);
        }
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
    result
}

fn list_transactions(request: &ListingRequest, store: &dyn RecordStore) -> Result<EngineQueryResult> {
    let found = store.find_page(&request.filter(), request.window(), SortOrder::DateOfSaleDesc)?;

    Ok(EngineQueryResult::Transactions(TransactionPage {
        transactions: found.records,
        total: found.total,
        page: request.page,
        per_page: request.per_page,
    }))
}
