//! Report engine error types
//!
//! Error codes:
//! - ORG_EMPTY_RESULT (ERROR)
//! - ORG_DANGLING_REFERENCE (FATAL)

use std::fmt;

/// Severity levels for report errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation failed but the snapshot is healthy
    Error,
    /// Snapshot is corrupt; the caller must halt
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Report-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportErrorCode {
    /// A single-row query found no candidate rows
    EmptyResult,
    /// An identifier failed to resolve during a join (FATAL)
    DanglingReference,
}

impl ReportErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ReportErrorCode::EmptyResult => "ORG_EMPTY_RESULT",
            ReportErrorCode::DanglingReference => "ORG_DANGLING_REFERENCE",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            ReportErrorCode::DanglingReference => Severity::Fatal,
            ReportErrorCode::EmptyResult => Severity::Error,
        }
    }
}

impl fmt::Display for ReportErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Report error with context
#[derive(Debug)]
pub struct ReportError {
    code: ReportErrorCode,
    message: String,
}

impl ReportError {
    /// Create an empty-result error (single-row query, no candidates)
    pub fn empty_result(reason: impl Into<String>) -> Self {
        Self {
            code: ReportErrorCode::EmptyResult,
            message: reason.into(),
        }
    }

    /// Create a dangling-reference error (FATAL).
    ///
    /// Given the store's insertion invariants this is unreachable on a
    /// healthy snapshot; surfacing it immediately beats producing
    /// misleading statistics.
    pub fn dangling_reference(kind: &str, id: u64) -> Self {
        Self {
            code: ReportErrorCode::DanglingReference,
            message: format!("Dangling {} reference: {}", kind, id),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ReportErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for ReportError {}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ReportErrorCode::EmptyResult.code(), "ORG_EMPTY_RESULT");
        assert_eq!(
            ReportErrorCode::DanglingReference.code(),
            "ORG_DANGLING_REFERENCE"
        );
    }

    #[test]
    fn test_dangling_reference_is_fatal() {
        let err = ReportError::dangling_reference("employee", 42);
        assert!(err.is_fatal());
        assert_eq!(err.severity(), Severity::Fatal);
    }

    #[test]
    fn test_empty_result_not_fatal() {
        let err = ReportError::empty_result("no employees");
        assert!(!err.is_fatal());
        assert_eq!(err.severity(), Severity::Error);
    }

    #[test]
    fn test_error_display() {
        let err = ReportError::dangling_reference("department", 9);
        let display = format!("{}", err);
        assert!(display.contains("FATAL"));
        assert!(display.contains("ORG_DANGLING_REFERENCE"));
        assert!(display.contains('9'));
    }
}
