//! API error types
//!
//! API errors are pass-through: they preserve the original error code and
//! severity from the report engine rather than re-wrapping them.

use std::fmt;

use crate::reports::{ReportError, Severity};

/// API error with preserved subsystem error information
#[derive(Debug)]
pub struct ApiError {
    /// Error code string (from the subsystem, or an API code)
    code: String,
    /// Error message
    message: String,
    /// Severity
    severity: Severity,
}

impl ApiError {
    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: "ORG_INVALID_REQUEST".to_string(),
            message: reason.into(),
            severity: Severity::Error,
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns whether the error is fatal
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Fatal
    }
}

impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        Self {
            code: err.code().code().to_string(),
            message: err.message().to_string(),
            severity: err.severity(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_code() {
        let err = ApiError::invalid_request("missing tag");
        assert_eq!(err.code(), "ORG_INVALID_REQUEST");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_report_error_passes_through() {
        let err: ApiError = ReportError::dangling_reference("employee", 7).into();
        assert_eq!(err.code(), "ORG_DANGLING_REFERENCE");
        assert!(err.is_fatal());
        assert!(err.message().contains('7'));
    }

    #[test]
    fn test_empty_result_passes_through_as_error() {
        let err: ApiError = ReportError::empty_result("no employees").into();
        assert_eq!(err.code(), "ORG_EMPTY_RESULT");
        assert!(!err.is_fatal());
    }
}
