//! CLI command implementations
//!
//! Commands are thin: they load the dataset, hand requests to the API
//! handler, and write protocol responses. Report failures are part of
//! the response protocol, not process failures.

use std::fs;
use std::path::Path;

use crate::api::{ReportHandler, ReportRequest};
use crate::model::{Assignment, Department, Employee, Project};
use crate::observability::{log_event, Event};
use crate::store::{DataStore, Dataset};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request_line, write_error, write_report};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { data } => init(&data),
        Command::Validate { data } => validate(&data),
        Command::Query { data } => query(&data),
        Command::Run { data } => run_all(&data),
    }
}

/// Write a starter dataset file; refuses to overwrite
pub fn init(data: &Path) -> CliResult<()> {
    if data.exists() {
        return Err(CliError::already_initialized(data));
    }

    let json = serde_json::to_string_pretty(&starter_dataset())?;
    fs::write(data, json)?;

    log_event(
        Event::DatasetWritten,
        &[("path", &data.display().to_string())],
    );
    Ok(())
}

/// Load a dataset and print collection counts
pub fn validate(data: &Path) -> CliResult<()> {
    let store = load(data)?;
    write_report(
        "validate",
        serde_json::json!({
            "departments": store.department_count(),
            "employees": store.employee_count(),
            "projects": store.project_count(),
            "assignments": store.assignment_count(),
        }),
    )
}

/// Execute a single report request read from stdin
pub fn query(data: &Path) -> CliResult<()> {
    let store = load(data)?;
    let line = read_request_line()?;

    let request = match ReportRequest::parse(&line) {
        Ok(request) => request,
        Err(err) => return write_error(&err),
    };

    execute(&store, &request)
}

/// Execute all seven reports, one response line each
pub fn run_all(data: &Path) -> CliResult<()> {
    let dataset = read_dataset(data)?;
    let min_salary = dataset.default_min_salary;
    let store = build_store(dataset)?;

    for request in ReportRequest::all(min_salary) {
        execute(&store, &request)?;
    }
    Ok(())
}

fn execute(store: &DataStore, request: &ReportRequest) -> CliResult<()> {
    log_event(Event::ReportStart, &[("report", request.name())]);

    let handler = ReportHandler::new(store);
    match handler.handle(request) {
        Ok(data) => {
            log_event(Event::ReportComplete, &[("report", request.name())]);
            write_report(request.name(), data)
        }
        Err(err) => {
            log_event(
                Event::ReportFailed,
                &[("report", request.name()), ("code", err.code())],
            );
            write_error(&err)
        }
    }
}

fn load(data: &Path) -> CliResult<DataStore> {
    build_store(read_dataset(data)?)
}

fn read_dataset(data: &Path) -> CliResult<Dataset> {
    log_event(
        Event::DatasetLoadStart,
        &[("path", &data.display().to_string())],
    );
    Dataset::read(data).map_err(CliError::from)
}

fn build_store(dataset: Dataset) -> CliResult<DataStore> {
    let store = dataset.into_store()?;
    log_event(
        Event::DatasetLoaded,
        &[
            ("departments", &store.department_count().to_string()),
            ("employees", &store.employee_count().to_string()),
            ("projects", &store.project_count().to_string()),
            ("assignments", &store.assignment_count().to_string()),
        ],
    );
    Ok(store)
}

/// The reference company dataset written by `init`
fn starter_dataset() -> Dataset {
    let department = |id, name: &str| Department {
        id,
        name: name.to_string(),
    };
    let employee = |id, name: &str, department_id, salary, manager_id| Employee {
        id,
        name: name.to_string(),
        department_id,
        salary,
        manager_id,
    };
    let project = |id, name: &str, budget| Project {
        id,
        name: name.to_string(),
        budget,
    };
    let assignment = |employee_id, project_id, role: &str| Assignment {
        employee_id,
        project_id,
        role: role.to_string(),
    };

    Dataset {
        departments: vec![
            department(1, "HR"),
            department(2, "Engineering"),
            department(3, "Sales"),
        ],
        employees: vec![
            employee(1, "Alice", 1, 5000, None),
            employee(2, "Bob", 2, 7000, None),
            employee(3, "Charlie", 2, 6000, Some(2)),
            employee(4, "David", 1, 5500, Some(1)),
            employee(5, "Eve", 3, 4500, None),
            employee(6, "Frank", 2, 6200, Some(2)),
            employee(7, "Grace", 3, 4800, None),
        ],
        projects: vec![
            project(1, "Project A", 100_000),
            project(2, "Project B", 150_000),
            project(3, "Project C", 120_000),
        ],
        assignments: vec![
            assignment(2, 1, "Lead"),
            assignment(3, 1, "Member"),
            assignment(6, 1, "Member"),
            assignment(1, 2, "Member"),
            assignment(4, 2, "Member"),
            assignment(5, 2, "Lead"),
            assignment(3, 3, "Lead"),
            assignment(6, 3, "Member"),
            assignment(7, 3, "Member"),
        ],
        default_min_salary: 5500,
    }
}
