//! API response types
//!
//! One JSON object per response. Report responses carry the report name
//! and an RFC3339 generation stamp alongside the rows.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

/// Successful report response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    pub status: String,
    pub report: String,
    pub generated_at: String,
    pub data: Value,
}

impl ReportResponse {
    /// Create a response for a completed report
    pub fn new(report: &str, data: Value) -> Self {
        Self {
            status: "ok".to_string(),
            report: report.to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            data,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("ReportResponse serialization cannot fail")
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create from an API error
    pub fn from_error(err: &ApiError) -> Self {
        Self {
            status: "error".to_string(),
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("ErrorResponse serialization cannot fail")
    }
}

/// Unified response type
#[derive(Debug, Clone)]
pub enum Response {
    Report(ReportResponse),
    Error(ErrorResponse),
}

impl Response {
    /// Create a report response
    pub fn report(report: &str, data: Value) -> Self {
        Response::Report(ReportResponse::new(report, data))
    }

    /// Create an error response
    pub fn error(err: &ApiError) -> Self {
        Response::Error(ErrorResponse::from_error(err))
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        match self {
            Response::Report(r) => r.to_json(),
            Response::Error(e) => e.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_report_response_shape() {
        let response = ReportResponse::new("manager_statistics", json!([{"manager": "Bob"}]));
        let value: Value = serde_json::from_str(&response.to_json()).unwrap();

        assert_eq!(value["status"], "ok");
        assert_eq!(value["report"], "manager_statistics");
        assert_eq!(value["data"][0]["manager"], "Bob");
        assert!(value["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_error_response_preserves_code() {
        let err = ApiError::invalid_request("bad tag");
        let value: Value = serde_json::from_str(&ErrorResponse::from_error(&err).to_json()).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["code"], "ORG_INVALID_REQUEST");
        assert_eq!(value["message"], "bad tag");
    }
}
