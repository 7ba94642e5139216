//! In-memory data store
//!
//! Identifiers are assigned 1-up per collection, mirroring an
//! auto-increment primary key. Insertion checks references against the
//! current contents, so a manager must already exist when the report
//! chain below them is inserted.

use std::collections::BTreeMap;

use crate::model::{
    Assignment, Department, DepartmentId, Employee, EmployeeId, Project, ProjectId,
};

use super::errors::{StoreError, StoreResult};

/// In-memory store for the four entity collections
///
/// All reads see a consistent snapshot for as long as the borrow lives;
/// the store has no interior mutability.
#[derive(Debug, Clone)]
pub struct DataStore {
    departments: BTreeMap<DepartmentId, Department>,
    employees: BTreeMap<EmployeeId, Employee>,
    projects: BTreeMap<ProjectId, Project>,
    assignments: BTreeMap<(EmployeeId, ProjectId), Assignment>,
    next_department_id: DepartmentId,
    next_employee_id: EmployeeId,
    next_project_id: ProjectId,
}

impl DataStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            departments: BTreeMap::new(),
            employees: BTreeMap::new(),
            projects: BTreeMap::new(),
            assignments: BTreeMap::new(),
            next_department_id: 1,
            next_employee_id: 1,
            next_project_id: 1,
        }
    }

    /// Drops all records and restarts identifier assignment.
    ///
    /// Administrative one-shot; must not be interleaved with reads.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Inserts a department and returns its identifier
    pub fn insert_department(&mut self, name: impl Into<String>) -> DepartmentId {
        let id = self.next_department_id;
        self.next_department_id += 1;
        self.departments.insert(
            id,
            Department {
                id,
                name: name.into(),
            },
        );
        id
    }

    /// Inserts an employee and returns its identifier.
    ///
    /// The department must exist; the manager, when given, must already
    /// have been inserted.
    pub fn insert_employee(
        &mut self,
        name: impl Into<String>,
        department_id: DepartmentId,
        salary: u32,
        manager_id: Option<EmployeeId>,
    ) -> StoreResult<EmployeeId> {
        if !self.departments.contains_key(&department_id) {
            return Err(StoreError::UnknownDepartment(department_id));
        }
        if let Some(manager_id) = manager_id {
            if !self.employees.contains_key(&manager_id) {
                return Err(StoreError::UnknownEmployee(manager_id));
            }
        }

        let id = self.next_employee_id;
        self.next_employee_id += 1;
        self.employees.insert(
            id,
            Employee {
                id,
                name: name.into(),
                department_id,
                salary,
                manager_id,
            },
        );
        Ok(id)
    }

    /// Inserts a project and returns its identifier
    pub fn insert_project(&mut self, name: impl Into<String>, budget: u32) -> ProjectId {
        let id = self.next_project_id;
        self.next_project_id += 1;
        self.projects.insert(
            id,
            Project {
                id,
                name: name.into(),
                budget,
            },
        );
        id
    }

    /// Links an employee to a project with a role label.
    ///
    /// Both references must resolve and the pair must not already exist.
    pub fn assign(
        &mut self,
        employee_id: EmployeeId,
        project_id: ProjectId,
        role: impl Into<String>,
    ) -> StoreResult<()> {
        if !self.employees.contains_key(&employee_id) {
            return Err(StoreError::UnknownEmployee(employee_id));
        }
        if !self.projects.contains_key(&project_id) {
            return Err(StoreError::UnknownProject(project_id));
        }

        let key = (employee_id, project_id);
        if self.assignments.contains_key(&key) {
            return Err(StoreError::DuplicateAssignment {
                employee_id,
                project_id,
            });
        }

        self.assignments.insert(
            key,
            Assignment {
                employee_id,
                project_id,
                role: role.into(),
            },
        );
        Ok(())
    }

    /// All departments, in identifier order
    pub fn list_departments(&self) -> Vec<Department> {
        self.departments.values().cloned().collect()
    }

    /// All employees, in identifier order
    pub fn list_employees(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    /// All projects, in identifier order
    pub fn list_projects(&self) -> Vec<Project> {
        self.projects.values().cloned().collect()
    }

    /// All assignments, in (employee, project) order
    pub fn list_assignments(&self) -> Vec<Assignment> {
        self.assignments.values().cloned().collect()
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Inserts a record the dataset loader has already validated.
    ///
    /// Bumps the identifier counter past the restored id so later
    /// insertions cannot collide.
    pub(crate) fn restore_department(&mut self, department: Department) {
        self.next_department_id = self.next_department_id.max(department.id + 1);
        self.departments.insert(department.id, department);
    }

    pub(crate) fn restore_employee(&mut self, employee: Employee) {
        self.next_employee_id = self.next_employee_id.max(employee.id + 1);
        self.employees.insert(employee.id, employee);
    }

    pub(crate) fn restore_project(&mut self, project: Project) {
        self.next_project_id = self.next_project_id.max(project.id + 1);
        self.projects.insert(project.id, project);
    }

    pub(crate) fn restore_assignment(&mut self, assignment: Assignment) {
        self.assignments
            .insert((assignment.employee_id, assignment.project_id), assignment);
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_start_at_one() {
        let mut store = DataStore::new();
        assert_eq!(store.insert_department("HR"), 1);
        assert_eq!(store.insert_department("Engineering"), 2);
        assert_eq!(store.insert_project("Project A", 100_000), 1);
    }

    #[test]
    fn test_employee_requires_existing_department() {
        let mut store = DataStore::new();
        let result = store.insert_employee("Alice", 99, 5000, None);
        assert!(matches!(result, Err(StoreError::UnknownDepartment(99))));
    }

    #[test]
    fn test_employee_requires_existing_manager() {
        let mut store = DataStore::new();
        let hr = store.insert_department("HR");
        let result = store.insert_employee("David", hr, 5500, Some(42));
        assert!(matches!(result, Err(StoreError::UnknownEmployee(42))));
    }

    #[test]
    fn test_manager_reference_accepted_once_present() {
        let mut store = DataStore::new();
        let hr = store.insert_department("HR");
        let alice = store.insert_employee("Alice", hr, 5000, None).unwrap();
        let david = store.insert_employee("David", hr, 5500, Some(alice)).unwrap();

        let employees = store.list_employees();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].id, david);
        assert_eq!(employees[1].manager_id, Some(alice));
    }

    #[test]
    fn test_assignment_rejects_dangling_references() {
        let mut store = DataStore::new();
        let hr = store.insert_department("HR");
        let alice = store.insert_employee("Alice", hr, 5000, None).unwrap();
        let project = store.insert_project("Project A", 100_000);

        assert!(matches!(
            store.assign(99, project, "Lead"),
            Err(StoreError::UnknownEmployee(99))
        ));
        assert!(matches!(
            store.assign(alice, 99, "Lead"),
            Err(StoreError::UnknownProject(99))
        ));
    }

    #[test]
    fn test_assignment_pair_is_unique() {
        let mut store = DataStore::new();
        let hr = store.insert_department("HR");
        let alice = store.insert_employee("Alice", hr, 5000, None).unwrap();
        let project = store.insert_project("Project A", 100_000);

        store.assign(alice, project, "Lead").unwrap();
        let result = store.assign(alice, project, "Member");
        assert!(matches!(
            result,
            Err(StoreError::DuplicateAssignment { .. })
        ));
        assert_eq!(store.assignment_count(), 1);
    }

    #[test]
    fn test_reset_clears_everything_and_restarts_ids() {
        let mut store = DataStore::new();
        let hr = store.insert_department("HR");
        store.insert_employee("Alice", hr, 5000, None).unwrap();
        store.insert_project("Project A", 100_000);

        store.reset();

        assert_eq!(store.department_count(), 0);
        assert_eq!(store.employee_count(), 0);
        assert_eq!(store.project_count(), 0);
        assert_eq!(store.assignment_count(), 0);
        assert_eq!(store.insert_department("HR"), 1);
    }

    #[test]
    fn test_listing_is_in_identifier_order() {
        let mut store = DataStore::new();
        store.insert_department("Sales");
        store.insert_department("Engineering");
        store.insert_department("HR");

        let names: Vec<String> = store
            .list_departments()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Sales", "Engineering", "HR"]);
    }
}
