//! # Store Errors
//!
//! Error types for insertion and dataset loading.

use thiserror::Error;

use crate::model::{DepartmentId, EmployeeId, ProjectId};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Referential-integrity and dataset errors
#[derive(Debug, Error)]
pub enum StoreError {
    // ==================
    // Referential Integrity
    // ==================

    /// Reference to a department that does not exist
    #[error("Unknown department: {0}")]
    UnknownDepartment(DepartmentId),

    /// Reference to an employee that does not exist
    #[error("Unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    /// Reference to a project that does not exist
    #[error("Unknown project: {0}")]
    UnknownProject(ProjectId),

    /// The (employee, project) pair is already assigned
    #[error("Employee {employee_id} is already assigned to project {project_id}")]
    DuplicateAssignment {
        employee_id: EmployeeId,
        project_id: ProjectId,
    },

    // ==================
    // Dataset Loading
    // ==================

    /// A dataset row reuses an identifier
    #[error("Duplicate {kind} id in dataset: {id}")]
    DuplicateId { kind: &'static str, id: u64 },

    /// Dataset file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not valid JSON
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_department_message() {
        let err = StoreError::UnknownDepartment(42);
        assert_eq!(err.to_string(), "Unknown department: 42");
    }

    #[test]
    fn test_duplicate_assignment_message() {
        let err = StoreError::DuplicateAssignment {
            employee_id: 2,
            project_id: 1,
        };
        assert!(err.to_string().contains("already assigned"));
    }

    #[test]
    fn test_duplicate_id_names_the_collection() {
        let err = StoreError::DuplicateId {
            kind: "employee",
            id: 7,
        };
        assert!(err.to_string().contains("employee"));
        assert!(err.to_string().contains('7'));
    }
}
