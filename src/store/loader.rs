//! Dataset loader
//!
//! Reads a JSON dataset file into a validated store. The whole dataset is
//! validated before any record lands, so manager references may point
//! forward in the file (unlike incremental insertion, which requires the
//! manager to exist first).

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Assignment, Department, Employee, EmployeeId, Project, ProjectId};

use super::errors::{StoreError, StoreResult};
use super::store::DataStore;

/// On-disk dataset document
///
/// Four arrays carrying explicit identifiers, plus the threshold the
/// `run` command feeds to the salary-filter report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    /// Threshold for the salary-filter report when running all reports
    #[serde(default)]
    pub default_min_salary: i64,
}

impl Dataset {
    /// Reads and parses a dataset file
    pub fn read(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        Ok(dataset)
    }

    /// Validates the dataset and builds a ready store.
    ///
    /// Checks, in order: identifier uniqueness per collection, employee
    /// department and manager references, assignment references, and
    /// assignment-pair uniqueness. The first violation aborts the load.
    pub fn into_store(self) -> StoreResult<DataStore> {
        let mut department_ids = BTreeSet::new();
        for department in &self.departments {
            if !department_ids.insert(department.id) {
                return Err(StoreError::DuplicateId {
                    kind: "department",
                    id: department.id,
                });
            }
        }

        let mut employee_ids: BTreeSet<EmployeeId> = BTreeSet::new();
        for employee in &self.employees {
            if !employee_ids.insert(employee.id) {
                return Err(StoreError::DuplicateId {
                    kind: "employee",
                    id: employee.id,
                });
            }
        }

        let mut project_ids: BTreeSet<ProjectId> = BTreeSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(StoreError::DuplicateId {
                    kind: "project",
                    id: project.id,
                });
            }
        }

        for employee in &self.employees {
            if !department_ids.contains(&employee.department_id) {
                return Err(StoreError::UnknownDepartment(employee.department_id));
            }
            if let Some(manager_id) = employee.manager_id {
                if !employee_ids.contains(&manager_id) {
                    return Err(StoreError::UnknownEmployee(manager_id));
                }
            }
        }

        let mut pairs = BTreeSet::new();
        for assignment in &self.assignments {
            if !employee_ids.contains(&assignment.employee_id) {
                return Err(StoreError::UnknownEmployee(assignment.employee_id));
            }
            if !project_ids.contains(&assignment.project_id) {
                return Err(StoreError::UnknownProject(assignment.project_id));
            }
            if !pairs.insert((assignment.employee_id, assignment.project_id)) {
                return Err(StoreError::DuplicateAssignment {
                    employee_id: assignment.employee_id,
                    project_id: assignment.project_id,
                });
            }
        }

        let mut store = DataStore::new();
        for department in self.departments {
            store.restore_department(department);
        }
        for employee in self.employees {
            store.restore_employee(employee);
        }
        for project in self.projects {
            store.restore_project(project);
        }
        for assignment in self.assignments {
            store.restore_assignment(assignment);
        }
        Ok(store)
    }
}

/// Reads a dataset file and loads it into a store
pub fn load_dataset(path: &Path) -> StoreResult<DataStore> {
    Dataset::read(path)?.into_store()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dataset_from(value: serde_json::Value) -> Dataset {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_document_loads_empty_store() {
        let store = dataset_from(json!({})).into_store().unwrap();
        assert_eq!(store.employee_count(), 0);
        assert_eq!(store.department_count(), 0);
    }

    #[test]
    fn test_forward_manager_reference_accepted() {
        // David appears before his manager Alice in the file.
        let dataset = dataset_from(json!({
            "departments": [{"id": 1, "name": "HR"}],
            "employees": [
                {"id": 4, "name": "David", "department_id": 1, "salary": 5500, "manager_id": 1},
                {"id": 1, "name": "Alice", "department_id": 1, "salary": 5000}
            ]
        }));

        let store = dataset.into_store().unwrap();
        assert_eq!(store.employee_count(), 2);
    }

    #[test]
    fn test_duplicate_employee_id_rejected() {
        let dataset = dataset_from(json!({
            "departments": [{"id": 1, "name": "HR"}],
            "employees": [
                {"id": 1, "name": "Alice", "department_id": 1, "salary": 5000},
                {"id": 1, "name": "Bob", "department_id": 1, "salary": 7000}
            ]
        }));

        let result = dataset.into_store();
        assert!(matches!(
            result,
            Err(StoreError::DuplicateId {
                kind: "employee",
                id: 1
            })
        ));
    }

    #[test]
    fn test_dangling_department_rejected() {
        let dataset = dataset_from(json!({
            "employees": [
                {"id": 1, "name": "Alice", "department_id": 9, "salary": 5000}
            ]
        }));

        assert!(matches!(
            dataset.into_store(),
            Err(StoreError::UnknownDepartment(9))
        ));
    }

    #[test]
    fn test_dangling_assignment_rejected() {
        let dataset = dataset_from(json!({
            "departments": [{"id": 1, "name": "HR"}],
            "employees": [
                {"id": 1, "name": "Alice", "department_id": 1, "salary": 5000}
            ],
            "assignments": [
                {"employee_id": 1, "project_id": 5, "role": "Lead"}
            ]
        }));

        assert!(matches!(
            dataset.into_store(),
            Err(StoreError::UnknownProject(5))
        ));
    }

    #[test]
    fn test_duplicate_pair_rejected() {
        let dataset = dataset_from(json!({
            "departments": [{"id": 1, "name": "HR"}],
            "employees": [
                {"id": 1, "name": "Alice", "department_id": 1, "salary": 5000}
            ],
            "projects": [{"id": 1, "name": "Project A", "budget": 100000}],
            "assignments": [
                {"employee_id": 1, "project_id": 1, "role": "Lead"},
                {"employee_id": 1, "project_id": 1, "role": "Member"}
            ]
        }));

        assert!(matches!(
            dataset.into_store(),
            Err(StoreError::DuplicateAssignment {
                employee_id: 1,
                project_id: 1
            })
        ));
    }

    #[test]
    fn test_insertion_continues_past_restored_ids() {
        let dataset = dataset_from(json!({
            "departments": [{"id": 3, "name": "Sales"}]
        }));

        let mut store = dataset.into_store().unwrap();
        assert_eq!(store.insert_department("Support"), 4);
    }
}
