//! Organization data model for orgdb
//!
//! Plain entity records shared by the store and the report engine.
//! References between entities are identifiers, never owning pointers;
//! resolution happens by map lookup at query time.

mod types;

pub use types::{
    Assignment, Department, DepartmentId, Employee, EmployeeId, Project, ProjectId,
};
