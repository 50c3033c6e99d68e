//! Remote seed feed retrieval

#![allow(clippy::result_large_err)]

use std::time::{Duration, Instant};

use salesdash_core::errors::DashError;
use salesdash_core::{log_op_end, log_op_error, log_op_start, SaleRecord};

use crate::errors::Result;
use crate::seed::parser::parse_feed_bytes;

/// Public product/transaction feed
pub const DEFAULT_FEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// Upper bound for a whole fetch, connect through body
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest feed body accepted
pub const MAX_FEED_BYTES: u64 = 64 * 1024 * 1024;

/// Download and parse the feed at `url`, accepting at most
/// [`MAX_FEED_BYTES`]
///
/// Nothing is written anywhere; callers replace their store only after this
/// returns `Ok`.
///
/// # Errors
///
/// Returns `Timeout` when the request exceeds `timeout`, and
/// `ExternalService` when the source is unreachable, answers with a
/// non-success status, sends too much, or sends a malformed feed.
pub async fn fetch_feed(url: &str, timeout: Duration) -> Result<Vec<SaleRecord>> {
    fetch_feed_with_limit(url, timeout, MAX_FEED_BYTES).await
}

/// [`fetch_feed`] with an explicit body size limit
///
/// # Errors
///
/// As [`fetch_feed`].
pub async fn fetch_feed_with_limit(
    url: &str,
    timeout: Duration,
    max_bytes: u64,
) -> Result<Vec<SaleRecord>> {
    log_op_start!("seed_fetch", url = url);
    let start = Instant::now();

    let result = fetch_inner(url, timeout, max_bytes).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    match &result {
        Ok(records) => {
            log_op_end!("seed_fetch", duration_ms = duration_ms, record_count = records.len());
        }
        Err(e) => {
            log_op_error!("seed_fetch", e.clone(), duration_ms = duration_ms);
        }
    }
    result
}

async fn fetch_inner(url: &str, timeout: Duration, max_bytes: u64) -> Result<Vec<SaleRecord>> {
    let classify = |err: reqwest::Error| -> DashError {
        if err.is_timeout() {
            DashError::FetchTimeout {
                url: url.to_string(),
                secs: timeout.as_secs(),
            }
        } else {
            DashError::UpstreamUnreachable {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    };

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(classify)?;

    let mut response = client.get(url).send().await.map_err(classify)?;

    let status = response.status();
    if !status.is_success() {
        return Err(DashError::UpstreamStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }
        .into());
    }

    let too_large = || DashError::FeedTooLarge {
        url: url.to_string(),
        limit: max_bytes,
    };
    if response.content_length().is_some_and(|len| len > max_bytes) {
        return Err(too_large().into());
    }

    // Content-Length may be absent or wrong, so the limit also holds per chunk
    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await.map_err(classify)? {
        if body.len() as u64 + chunk.len() as u64 > max_bytes {
            return Err(too_large().into());
        }
        body.extend_from_slice(&chunk);
    }
    parse_feed_bytes(&body)
}
