//! HTTP error mapping
//!
//! Every failure leaves the server as `{ "error": message, "code": "ERR_…" }`
//! with 400 for caller mistakes and 500 otherwise.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use salesdash_core::{ExError, ExErrorKind};
use serde::Serialize;
use tokio::task::JoinError;

/// Handler error wrapping the canonical `ExError`
#[derive(Debug)]
pub struct ApiError(pub ExError);

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    code: &'static str,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        if self.0.kind().is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(err_code = self.0.code(), error = %self.0, "request failed");
        }

        let message = if self.0.message().is_empty() {
            self.0.to_string()
        } else {
            self.0.message().to_string()
        };
        let body = ErrorBody {
            error: &message,
            code: self.0.code(),
        };
        (status, Json(body)).into_response()
    }
}

/// Error for an engine answer of the wrong `EngineQueryResult` variant
pub fn unexpected_result(op: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message("engine returned an unexpected result variant")
}

/// Error for a blocking store task that panicked or was cancelled
pub fn join_error(err: JoinError) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op("spawn_blocking")
        .with_message(err.to_string())
}
