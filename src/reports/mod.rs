//! Report subsystem for orgdb
//!
//! The aggregation engine: seven read-only analytical operations over a
//! data store snapshot.
//!
//! # Design Principles
//!
//! - Pure reads: the engine never mutates store contents
//! - Deterministic: same snapshot, same results, byte for byte
//! - Total ordering: every sort carries a documented tie-break
//! - A reference that fails to resolve mid-join is FATAL, never skipped

mod engine;
mod errors;
mod result;

pub use engine::{ReportEngine, SnapshotSource};
pub use errors::{ReportError, ReportErrorCode, ReportResult, Severity};
pub use result::{DepartmentStats, ManagerStats, ProjectStats};
