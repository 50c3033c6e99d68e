use thiserror::Error;

/// Result type alias using the canonical `ExError`
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Request validation
    /// Missing or malformed request parameter (month, page, perPage)
    InvalidInput,

    // Seed source
    /// Seed feed unreachable, non-success status, or malformed payload
    ExternalService,
    /// Seed fetch exceeded its time bound
    Timeout,

    // Storage
    Serialization,
    Persistence,
    Concurrency,
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the caller (rather than the server) is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, ExErrorKind::InvalidInput)
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging. Built with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Name the offending request field or record
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the offending field, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for SalesDash operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashError {
    // ===== Validation Errors =====
    /// The month query parameter was not supplied
    #[error("Month parameter is required")]
    MonthMissing,

    /// The month query parameter is not an integer in 1..=12
    #[error("Invalid month '{raw}': expected an integer from 1 to 12")]
    MonthInvalid { raw: String },

    /// A pagination parameter is not an integer
    #[error("Invalid {param} '{raw}': expected an integer")]
    PaginationInvalid { param: String, raw: String },

    // ===== Seed Errors =====
    /// The seed source could not be reached
    #[error("Seed source {url} unreachable: {reason}")]
    UpstreamUnreachable { url: String, reason: String },

    /// The seed source answered with a non-success status
    #[error("Seed source {url} returned HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    /// The seed payload is not a valid array of sale records
    #[error("Malformed seed feed: {reason}")]
    MalformedFeed { reason: String },

    /// The seed payload is larger than the fetch accepts
    #[error("Seed feed from {url} exceeds {limit} bytes")]
    FeedTooLarge { url: String, limit: u64 },

    /// The seed fetch did not finish in time
    #[error("Seed fetch from {url} timed out after {secs}s")]
    FetchTimeout { url: String, secs: u64 },

    // ===== Storage Errors =====
    /// The record store failed
    #[error("Store error: {message}")]
    Store { message: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from DashError to ExError
impl From<DashError> for ExError {
    fn from(err: DashError) -> Self {
        let message = err.to_string();
        match err {
            DashError::MonthMissing | DashError::MonthInvalid { .. } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_field("month")
                    .with_message(message)
            }

            DashError::PaginationInvalid { param, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_field(param)
                .with_message(message),

            DashError::UpstreamUnreachable { .. }
            | DashError::UpstreamStatus { .. }
            | DashError::MalformedFeed { .. }
            | DashError::FeedTooLarge { .. } => ExError::new(ExErrorKind::ExternalService)
                .with_op("seed_fetch")
                .with_message(message),

            DashError::FetchTimeout { .. } => ExError::new(ExErrorKind::Timeout)
                .with_op("seed_fetch")
                .with_message(message),

            DashError::Store { .. } => ExError::new(ExErrorKind::Persistence).with_message(message),

            DashError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to DashError
impl From<serde_json::Error> for DashError {
    fn from(err: serde_json::Error) -> Self {
        DashError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::ExternalService, "ERR_EXTERNAL_SERVICE"),
            (ExErrorKind::Timeout, "ERR_TIMEOUT"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_only_invalid_input_is_client_error() {
        let server_side = [
            ExErrorKind::ExternalService,
            ExErrorKind::Timeout,
            ExErrorKind::Serialization,
            ExErrorKind::Persistence,
            ExErrorKind::Concurrency,
            ExErrorKind::Io,
            ExErrorKind::Internal,
        ];
        assert!(ExErrorKind::InvalidInput.is_client_error());
        assert!(server_side.iter().all(|kind| !kind.is_client_error()));
    }

    #[test]
    fn test_month_errors_are_invalid_input() {
        let err: ExError = DashError::MonthInvalid {
            raw: "abc".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.field(), Some("month"));
        assert!(err.message().contains("abc"));
        assert!(err.kind().is_client_error());
    }

    #[test]
    fn test_fetch_timeout_maps_to_timeout() {
        let err: ExError = DashError::FetchTimeout {
            url: "http://feed".to_string(),
            secs: 5,
        }
        .into();
        assert_eq!(err.kind(), ExErrorKind::Timeout);
        assert_eq!(err.op(), Some("seed_fetch"));
        assert!(!err.kind().is_client_error());
    }

    #[test]
    fn test_display_includes_code_op_and_field() {
        let err = ExError::new(ExErrorKind::InvalidInput)
            .with_op("transactions")
            .with_field("page")
            .with_message("bad page");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_INVALID_INPUT]"));
        assert!(rendered.contains("'transactions'"));
        assert!(rendered.contains("(field: page)"));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        let inner = ExError::new(ExErrorKind::Persistence).with_message("disk full");
        let outer = ExError::new(ExErrorKind::Internal).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(ExErrorKind::Persistence)
        );
        assert!(std::error::Error::source(&outer).is_some());
    }
}
