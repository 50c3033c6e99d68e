//! Per-request correlation id

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use salesdash_core_types::schema::HEADER_REQUEST_ID;
use salesdash_core_types::RequestContext;
use tracing::Instrument;

/// Attach a `RequestContext` to the request, run the rest of the stack
/// inside a `request` span, and echo the id in `x-request-id`
///
/// An inbound `x-request-id` is reused; otherwise a fresh UUIDv7 is minted.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let inbound = request
        .headers()
        .get(HEADER_REQUEST_ID)
        .and_then(|value| value.to_str().ok());
    let ctx = RequestContext::from_header(inbound);

    let span = tracing::info_span!(
        "request",
        request_id = %ctx.request_id,
        method = %request.method(),
        uri = %request.uri(),
    );
    let header = HeaderValue::from_str(ctx.request_id.as_str()).ok();
    request.extensions_mut().insert(ctx);

    let mut response = next.run(request).instrument(span).await;
    if let Some(value) = header {
        response.headers_mut().insert(HEADER_REQUEST_ID, value);
    }
    response
}
