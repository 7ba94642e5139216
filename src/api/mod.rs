//! API layer for orgdb
//!
//! The caller-facing surface over the report engine: JSON request
//! parsing, dispatch against a loaded store, and response envelopes.
//! Errors from lower subsystems pass through with their original code
//! and severity preserved.

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult};
pub use handler::ReportHandler;
pub use request::ReportRequest;
pub use response::{ErrorResponse, ReportResponse, Response};
