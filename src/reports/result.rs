//! Typed report rows
//!
//! Each report returns its own explicit record type, tagged by operation,
//! so every contract is statically checkable rather than a loosely-typed
//! row. Reports that return employees reuse the `Employee` record itself.

use serde::{Deserialize, Serialize};

/// Per-department salary statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentStats {
    pub department: String,
    /// Average salary, rounded half-up to the nearest integer
    pub average_salary: u32,
    pub employee_count: u32,
}

/// Per-project participation and payroll statistics
///
/// Projects with no participants report zero count and zero total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub project: String,
    pub employee_count: u32,
    pub total_salary: u64,
}

/// Direct-report count for one manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerStats {
    pub manager: String,
    pub subordinate_count: u32,
}
