//! Entity type definitions
//!
//! Four entity kinds:
//! - Department: organizational unit employees belong to
//! - Employee: belongs to exactly one department, optionally reports to a manager
//! - Project: carries a budget
//! - Assignment: many-to-many link between an employee and a project

use serde::{Deserialize, Serialize};

/// Identifier for a department record
pub type DepartmentId = u64;

/// Identifier for an employee record
pub type EmployeeId = u64;

/// Identifier for a project record
pub type ProjectId = u64;

/// A department
///
/// Names are unique by convention, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

/// An employee
///
/// The manager reference is self-referential: when present it must resolve
/// to an existing employee. It is stored as a bare identifier and resolved
/// by index lookup at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department_id: DepartmentId,
    pub salary: u32,
    /// None means "no manager"
    #[serde(default)]
    pub manager_id: Option<EmployeeId>,
}

/// A project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub budget: u32,
}

/// Participation of one employee in one project
///
/// The (employee, project) pair is unique per snapshot; the role is a
/// free-form label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_employee_manager_defaults_to_none() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 1,
            "name": "Alice",
            "department_id": 1,
            "salary": 5000
        }))
        .unwrap();

        assert_eq!(employee.manager_id, None);
    }

    #[test]
    fn test_employee_manager_reference_preserved() {
        let employee: Employee = serde_json::from_value(json!({
            "id": 3,
            "name": "Charlie",
            "department_id": 2,
            "salary": 6000,
            "manager_id": 2
        }))
        .unwrap();

        assert_eq!(employee.manager_id, Some(2));
    }

    #[test]
    fn test_assignment_role_label() {
        let assignment: Assignment = serde_json::from_value(json!({
            "employee_id": 2,
            "project_id": 1,
            "role": "Lead"
        }))
        .unwrap();

        assert_eq!(assignment.role, "Lead");
    }
}
