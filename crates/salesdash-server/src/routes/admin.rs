use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use salesdash_core::ExError;
use salesdash_engine::{EngineQuery, EngineQueryResult};
use serde::Serialize;
use tracing::info;

use crate::error::{unexpected_result, ApiError};
use crate::state::AppState;

#[derive(Serialize)]
pub struct InitializeResponse {
    message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    records: u64,
}

/// POST /api/initialize
pub async fn initialize(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InitializeResponse>, ApiError> {
    let records = state.reseed().await?;
    info!(records, source = state.seed_url(), "store reseeded");
    Ok(Json(InitializeResponse {
        message: "Database initialized successfully",
    }))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let records = record_count(state.run_query(EngineQuery::RecordCount).await?)?;
    Ok(Json(HealthResponse {
        status: "ok",
        records,
    }))
}

fn record_count(result: EngineQueryResult) -> Result<u64, ExError> {
    match result {
        EngineQueryResult::RecordCount(n) => Ok(n),
        _ => Err(unexpected_result("health")),
    }
}
