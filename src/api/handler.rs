//! Report dispatch
//!
//! Maps a parsed request onto the engine and renders the typed rows as
//! JSON values for the response envelope.

use serde_json::Value;

use crate::reports::ReportEngine;
use crate::store::DataStore;

use super::errors::ApiResult;
use super::request::ReportRequest;

/// Dispatches report requests against a loaded store
pub struct ReportHandler<'a> {
    engine: ReportEngine<'a, DataStore>,
}

impl<'a> ReportHandler<'a> {
    /// Creates a handler over the given store
    pub fn new(store: &'a DataStore) -> Self {
        Self {
            engine: ReportEngine::new(store),
        }
    }

    /// Executes one report request, returning its rows as a JSON value
    pub fn handle(&self, request: &ReportRequest) -> ApiResult<Value> {
        let data = match request {
            ReportRequest::NamesByMinSalary { min_salary } => {
                to_json(self.engine.names_by_min_salary(*min_salary)?)
            }
            ReportRequest::DepartmentStatistics => to_json(self.engine.department_statistics()?),
            ReportRequest::HighestPaidEmployee => to_json(self.engine.highest_paid_employee()?),
            ReportRequest::ProjectStatistics => to_json(self.engine.project_statistics()?),
            ReportRequest::TopEarnersPerDepartment => {
                to_json(self.engine.top_earners_per_department()?)
            }
            ReportRequest::UnassignedEmployees => to_json(self.engine.unassigned_employees()?),
            ReportRequest::ManagerStatistics => to_json(self.engine.manager_statistics()?),
        };
        Ok(data)
    }
}

fn to_json<T: serde::Serialize>(rows: T) -> Value {
    serde_json::to_value(rows).expect("report row serialization cannot fail")
}
