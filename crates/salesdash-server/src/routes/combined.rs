//! Combined dashboard payload
//!
//! Parameters are validated once; the four sub-queries then run
//! concurrently and all of them finish before the response is built. Any
//! failure fails the whole request with the first error in
//! listing, statistics, bar chart, pie chart order.

#![allow(clippy::result_large_err)]

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use salesdash_core::errors::Result;
use salesdash_core::{ListingParams, ListingRequest};
use salesdash_engine::{CombinedData, EngineQuery, EngineQueryResult};

use crate::error::{unexpected_result, ApiError};
use crate::extract::ApiQuery;
use crate::state::AppState;

/// GET /api/combined-data?month=&search=&page=&perPage=
pub async fn combined_data(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListingParams>,
) -> std::result::Result<Json<CombinedData>, ApiError> {
    let request = ListingRequest::from_params(&params)?;
    let month = request.month;

    let (listing, statistics, bar_chart, pie_chart) = tokio::join!(
        state.run_query(EngineQuery::Transactions(request)),
        state.run_query(EngineQuery::Statistics { month }),
        state.run_query(EngineQuery::BarChart { month }),
        state.run_query(EngineQuery::PieChart { month }),
    );

    Ok(Json(assemble(listing, statistics, bar_chart, pie_chart)?))
}

fn assemble(
    listing: Result<EngineQueryResult>,
    statistics: Result<EngineQueryResult>,
    bar_chart: Result<EngineQueryResult>,
    pie_chart: Result<EngineQueryResult>,
) -> Result<CombinedData> {
    let transactions = match listing? {
        EngineQueryResult::Transactions(page) => page,
        _ => return Err(unexpected_result("transactions")),
    };
    let statistics = match statistics? {
        EngineQueryResult::Statistics(stats) => stats,
        _ => return Err(unexpected_result("statistics")),
    };
    let bar_chart = match bar_chart? {
        EngineQueryResult::BarChart(ranges) => ranges,
        _ => return Err(unexpected_result("bar_chart")),
    };
    let pie_chart = match pie_chart? {
        EngineQueryResult::PieChart(categories) => categories,
        _ => return Err(unexpected_result("pie_chart")),
    };

    Ok(CombinedData {
        transactions,
        statistics,
        bar_chart,
        pie_chart,
    })
}
