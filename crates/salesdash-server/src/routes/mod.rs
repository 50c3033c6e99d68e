//! HTTP route handlers and router configuration

mod admin;
mod analytics;
mod combined;
mod transactions;

use std::sync::Arc;

use axum::error_handling::HandleErrorLayer;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{middleware, BoxError, Router};
use salesdash_core::{ExError, ExErrorKind};
use tower::timeout::error::Elapsed;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::error::ApiError;
use crate::request_id::request_id;
use crate::state::AppState;

/// Build the main application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/initialize", post(admin::initialize))
        .route("/transactions", get(transactions::list))
        .route("/statistics", get(analytics::statistics))
        .route("/bar-chart", get(analytics::bar_chart))
        .route("/pie-chart", get(analytics::pie_chart))
        .route("/combined-data", get(combined::combined_data));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(admin::health))
        .nest("/api", api)
        .with_state(Arc::clone(&state))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .layer(TimeoutLayer::new(state.request_timeout())),
        )
        .layer(cors)
        .layer(middleware::from_fn(request_id))
}

async fn handle_timeout(err: BoxError) -> ApiError {
    let error = if err.is::<Elapsed>() {
        ExError::new(ExErrorKind::Timeout)
            .with_op("request")
            .with_message("Request timed out")
    } else {
        ExError::new(ExErrorKind::Internal)
            .with_op("request")
            .with_message(err.to_string())
    };
    ApiError(error)
}
