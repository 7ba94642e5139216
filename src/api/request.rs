//! API request types
//!
//! One JSON object per request, tagged by report name:
//!
//! ```json
//! {"report": "names_by_min_salary", "min_salary": 5500}
//! {"report": "department_statistics"}
//! ```

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

/// A request for one of the seven reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum ReportRequest {
    /// Names of employees earning at least `min_salary`
    NamesByMinSalary { min_salary: i64 },
    /// Per-department average salary and headcount
    DepartmentStatistics,
    /// The single highest-paid employee
    HighestPaidEmployee,
    /// Per-project participant count and salary sum
    ProjectStatistics,
    /// Top earner(s) of every department
    TopEarnersPerDepartment,
    /// Employees with no project assignment
    UnassignedEmployees,
    /// Direct-report counts per manager
    ManagerStatistics,
}

impl ReportRequest {
    /// Parse a request from a JSON string
    pub fn parse(json: &str) -> ApiResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ApiError::invalid_request(format!("Invalid request: {}", e)))
    }

    /// Report name as it appears in the request tag
    pub fn name(&self) -> &'static str {
        match self {
            ReportRequest::NamesByMinSalary { .. } => "names_by_min_salary",
            ReportRequest::DepartmentStatistics => "department_statistics",
            ReportRequest::HighestPaidEmployee => "highest_paid_employee",
            ReportRequest::ProjectStatistics => "project_statistics",
            ReportRequest::TopEarnersPerDepartment => "top_earners_per_department",
            ReportRequest::UnassignedEmployees => "unassigned_employees",
            ReportRequest::ManagerStatistics => "manager_statistics",
        }
    }

    /// All seven reports in presentation order, for the `run` command
    pub fn all(min_salary: i64) -> Vec<ReportRequest> {
        vec![
            ReportRequest::NamesByMinSalary { min_salary },
            ReportRequest::DepartmentStatistics,
            ReportRequest::HighestPaidEmployee,
            ReportRequest::ProjectStatistics,
            ReportRequest::TopEarnersPerDepartment,
            ReportRequest::UnassignedEmployees,
            ReportRequest::ManagerStatistics,
        ]
    }
}
