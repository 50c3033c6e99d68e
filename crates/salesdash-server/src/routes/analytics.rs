//! Month analytics views

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use salesdash_core::MonthParams;
use salesdash_engine::{EngineQuery, EngineQueryResult};

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// GET /api/statistics?month=
pub async fn statistics(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<MonthParams>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    let month = params.month()?;
    Ok(Json(state.run_query(EngineQuery::Statistics { month }).await?))
}

/// GET /api/bar-chart?month=
pub async fn bar_chart(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<MonthParams>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    let month = params.month()?;
    Ok(Json(state.run_query(EngineQuery::BarChart { month }).await?))
}

/// GET /api/pie-chart?month=
pub async fn pie_chart(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<MonthParams>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    let month = params.month()?;
    Ok(Json(state.run_query(EngineQuery::PieChart { month }).await?))
}
