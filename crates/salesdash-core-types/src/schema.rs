//! Names shared by the log macros, the test capture and the HTTP layer

/// Field naming the operation an event belongs to
pub const FIELD_OP: &str = "op";
/// Field holding one of the `EVENT_*` names
pub const FIELD_EVENT: &str = "event";
/// Span field used for request correlation
pub const FIELD_REQUEST_ID: &str = "request_id";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

/// Inbound and outbound correlation header
pub const HEADER_REQUEST_ID: &str = "x-request-id";
