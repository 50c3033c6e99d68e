//! Request extractors whose rejections use the JSON error body

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use salesdash_core::{ExError, ExErrorKind};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `Query<T>` that reports an undecodable query string as `ERR_INVALID_INPUT`
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(ApiError(query_rejected(&rejection))),
        }
    }
}

fn query_rejected(rejection: &QueryRejection) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("query_params")
        .with_message(rejection.body_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use salesdash_core::MonthParams;

    async fn extract(uri: &str) -> Result<ApiQuery<MonthParams>, ApiError> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ApiQuery::<MonthParams>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_well_formed_query_passes_through() {
        let ApiQuery(params) = extract("/api/statistics?month=3").await.unwrap();
        assert_eq!(params.month().unwrap().number(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_parameter_is_invalid_input() {
        let err = extract("/api/statistics?month=3&month=4").await.unwrap_err();
        assert_eq!(err.0.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.0.op(), Some("query_params"));
        assert!(err.0.message().contains("month"));
    }
}
