//! Request correlation
//!
//! Every inbound HTTP request gets a `RequestId`: the caller's
//! `x-request-id` when it is usable, otherwise a fresh UUIDv7. The id rides
//! on the request's tracing span and is echoed back in the response.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest caller-supplied id that is reused as is
pub const MAX_REQUEST_ID_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Mint a new time-ordered id
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Accept a caller-supplied id
    ///
    /// The value is trimmed. It is rejected when empty, longer than
    /// [`MAX_REQUEST_ID_LEN`], or containing anything but visible ASCII, so
    /// it is always safe to log and to send back as a header.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let usable = !trimmed.is_empty()
            && trimmed.len() <= MAX_REQUEST_ID_LEN
            && trimmed.bytes().all(|b| b.is_ascii_graphic());
        usable.then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-request context stored in the request extensions
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    /// Reuse the inbound header value when [`RequestId::parse`] accepts it,
    /// otherwise mint a new id
    pub fn from_header(value: Option<&str>) -> Self {
        let request_id = value.and_then(RequestId::parse).unwrap_or_default();
        Self { request_id }
    }
}
