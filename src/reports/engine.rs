//! Report engine for orgdb
//!
//! Executes the seven analytical reports against a data store snapshot,
//! producing deterministic results.
//!
//! Execution discipline, applied to every report:
//! 1. Read the full snapshot through `SnapshotSource`
//! 2. Resolve references through identifier indexes, never positional order
//! 3. Aggregate in integer arithmetic
//! 4. Sort by the report's key, ties broken as documented per report
//!
//! Results are pure functions of the snapshot: the iteration order the
//! source happens to return cannot leak into any result.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Assignment, Department, DepartmentId, Employee, EmployeeId, Project, ProjectId};
use crate::store::DataStore;

use super::errors::{ReportError, ReportResult};
use super::result::{DepartmentStats, ManagerStats, ProjectStats};

/// Accessor contract the engine reads through.
///
/// The engine performs no writes and assumes the snapshot already
/// satisfies the store's referential-integrity invariants. Sequences may
/// come back in any order.
pub trait SnapshotSource {
    /// All departments
    fn list_departments(&self) -> Vec<Department>;

    /// All employees
    fn list_employees(&self) -> Vec<Employee>;

    /// All projects
    fn list_projects(&self) -> Vec<Project>;

    /// All assignments
    fn list_assignments(&self) -> Vec<Assignment>;
}

impl SnapshotSource for DataStore {
    fn list_departments(&self) -> Vec<Department> {
        self.list_departments()
    }

    fn list_employees(&self) -> Vec<Employee> {
        self.list_employees()
    }

    fn list_projects(&self) -> Vec<Project> {
        self.list_projects()
    }

    fn list_assignments(&self) -> Vec<Assignment> {
        self.list_assignments()
    }
}

/// Report engine executing the seven analytical operations
///
/// Stateless: holds only a shared reference to its snapshot source, so
/// operations may run concurrently from multiple callers with no locks.
pub struct ReportEngine<'a, S: SnapshotSource> {
    source: &'a S,
}

impl<'a, S: SnapshotSource> ReportEngine<'a, S> {
    /// Creates a new engine over the given snapshot source
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Report 1: names of employees earning at least `min_salary`,
    /// alphabetical.
    ///
    /// Any threshold is accepted; a negative value yields every employee.
    pub fn names_by_min_salary(&self, min_salary: i64) -> ReportResult<Vec<String>> {
        let mut names: Vec<String> = self
            .source
            .list_employees()
            .into_iter()
            .filter(|employee| i64::from(employee.salary) >= min_salary)
            .map(|employee| employee.name)
            .collect();
        names.sort();
        Ok(names)
    }

    /// Report 2: per-department average salary and employee count,
    /// ordered by department name.
    ///
    /// The average is rounded half-up. Departments with no employees do
    /// not appear (inner join).
    pub fn department_statistics(&self) -> ReportResult<Vec<DepartmentStats>> {
        let departments = self.source.list_departments();
        let department_names: BTreeMap<DepartmentId, &str> = departments
            .iter()
            .map(|department| (department.id, department.name.as_str()))
            .collect();

        let mut totals: BTreeMap<DepartmentId, (u64, u32)> = BTreeMap::new();
        for employee in self.source.list_employees() {
            let entry = totals.entry(employee.department_id).or_insert((0, 0));
            entry.0 += u64::from(employee.salary);
            entry.1 += 1;
        }

        // Rows materialize in department-id order; the stable sort below
        // keeps that as the order among equal names.
        let mut rows = Vec::with_capacity(totals.len());
        for (department_id, (sum, count)) in totals {
            let name = department_names
                .get(&department_id)
                .ok_or_else(|| ReportError::dangling_reference("department", department_id))?;
            rows.push(DepartmentStats {
                department: (*name).to_string(),
                average_salary: round_half_up(sum, u64::from(count)) as u32,
                employee_count: count,
            });
        }
        rows.sort_by(|a, b| a.department.cmp(&b.department));
        Ok(rows)
    }

    /// Report 3: the single highest-paid employee.
    ///
    /// When several employees share the maximum salary, the lowest
    /// employee id wins, independent of source order. Fails with
    /// ORG_EMPTY_RESULT when the employee collection is empty.
    pub fn highest_paid_employee(&self) -> ReportResult<Employee> {
        self.source
            .list_employees()
            .into_iter()
            .max_by(|a, b| a.salary.cmp(&b.salary).then_with(|| b.id.cmp(&a.id)))
            .ok_or_else(|| ReportError::empty_result("no employees in snapshot"))
    }

    /// Report 4: per-project participant count and salary sum, ordered
    /// by project name.
    ///
    /// Left join: every project appears, zero participants reported as
    /// count 0 and sum 0.
    pub fn project_statistics(&self) -> ReportResult<Vec<ProjectStats>> {
        let employees = self.source.list_employees();
        let salaries: BTreeMap<EmployeeId, u32> = employees
            .iter()
            .map(|employee| (employee.id, employee.salary))
            .collect();

        let mut totals: BTreeMap<ProjectId, (String, u32, u64)> = self
            .source
            .list_projects()
            .into_iter()
            .map(|project| (project.id, (project.name, 0, 0)))
            .collect();

        for assignment in self.source.list_assignments() {
            let entry = totals
                .get_mut(&assignment.project_id)
                .ok_or_else(|| ReportError::dangling_reference("project", assignment.project_id))?;
            let salary = salaries
                .get(&assignment.employee_id)
                .ok_or_else(|| ReportError::dangling_reference("employee", assignment.employee_id))?;
            entry.1 += 1;
            entry.2 += u64::from(*salary);
        }

        let mut rows: Vec<ProjectStats> = totals
            .into_values()
            .map(|(project, employee_count, total_salary)| ProjectStats {
                project,
                employee_count,
                total_salary,
            })
            .collect();
        rows.sort_by(|a, b| a.project.cmp(&b.project));
        Ok(rows)
    }

    /// Report 5: every department's top earner(s), ordered by department
    /// name then employee name.
    ///
    /// All employees tied at their department's maximum salary are
    /// included, one row per employee.
    pub fn top_earners_per_department(&self) -> ReportResult<Vec<Employee>> {
        let departments = self.source.list_departments();
        let department_names: BTreeMap<DepartmentId, &str> = departments
            .iter()
            .map(|department| (department.id, department.name.as_str()))
            .collect();

        let mut employees = self.source.list_employees();
        employees.sort_by_key(|employee| employee.id);

        let mut max_salary: BTreeMap<DepartmentId, u32> = BTreeMap::new();
        for employee in &employees {
            let entry = max_salary
                .entry(employee.department_id)
                .or_insert(employee.salary);
            if employee.salary > *entry {
                *entry = employee.salary;
            }
        }

        let mut rows: Vec<(String, Employee)> = Vec::new();
        for employee in employees {
            if max_salary.get(&employee.department_id) != Some(&employee.salary) {
                continue;
            }
            let name = department_names
                .get(&employee.department_id)
                .ok_or_else(|| {
                    ReportError::dangling_reference("department", employee.department_id)
                })?;
            rows.push(((*name).to_string(), employee));
        }
        rows.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name.cmp(&b.1.name)));
        Ok(rows.into_iter().map(|(_, employee)| employee).collect())
    }

    /// Report 6: names of employees with no project assignment,
    /// alphabetical.
    pub fn unassigned_employees(&self) -> ReportResult<Vec<String>> {
        let assigned: BTreeSet<EmployeeId> = self
            .source
            .list_assignments()
            .into_iter()
            .map(|assignment| assignment.employee_id)
            .collect();

        let mut names: Vec<String> = self
            .source
            .list_employees()
            .into_iter()
            .filter(|employee| !assigned.contains(&employee.id))
            .map(|employee| employee.name)
            .collect();
        names.sort();
        Ok(names)
    }

    /// Report 7: direct-report counts per manager, busiest first, equal
    /// counts ordered by manager name.
    ///
    /// Only employees with at least one direct report appear.
    pub fn manager_statistics(&self) -> ReportResult<Vec<ManagerStats>> {
        let employees = self.source.list_employees();
        let names: BTreeMap<EmployeeId, &str> = employees
            .iter()
            .map(|employee| (employee.id, employee.name.as_str()))
            .collect();

        let mut counts: BTreeMap<EmployeeId, u32> = BTreeMap::new();
        for employee in &employees {
            if let Some(manager_id) = employee.manager_id {
                *counts.entry(manager_id).or_insert(0) += 1;
            }
        }

        let mut rows = Vec::with_capacity(counts.len());
        for (manager_id, subordinate_count) in counts {
            let manager = names
                .get(&manager_id)
                .ok_or_else(|| ReportError::dangling_reference("employee", manager_id))?;
            rows.push(ManagerStats {
                manager: (*manager).to_string(),
                subordinate_count,
            });
        }
        rows.sort_by(|a, b| {
            b.subordinate_count
                .cmp(&a.subordinate_count)
                .then_with(|| a.manager.cmp(&b.manager))
        });
        Ok(rows)
    }
}

/// Rounds sum/count to the nearest integer, halves away from zero.
///
/// Integer arithmetic only; count must be non-zero.
fn round_half_up(sum: u64, count: u64) -> u64 {
    (2 * sum + count) / (2 * count)
}
