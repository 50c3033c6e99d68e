use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use salesdash_core::{ListingParams, ListingRequest};
use salesdash_engine::{EngineQuery, EngineQueryResult};

use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::state::AppState;

/// GET /api/transactions?month=&search=&page=&perPage=
pub async fn list(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<ListingParams>,
) -> Result<Json<EngineQueryResult>, ApiError> {
    let request = ListingRequest::from_params(&params)?;
    let result = state.run_query(EngineQuery::Transactions(request)).await?;
    Ok(Json(result))
}
