//! JSON I/O handling for CLI
//!
//! One JSON object per line: requests on stdin, responses on stdout.
//! Log lines go to stderr via the observability module, so stdout stays
//! machine-readable.

use std::io::{self, BufRead, Write};

use serde_json::Value;

use crate::api::{ApiError, Response};

use super::errors::{CliError, CliResult};

/// Read one request line from stdin
pub fn read_request_line() -> CliResult<String> {
    let stdin = io::stdin();
    let mut line = String::new();

    stdin.lock().read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(line)
}

/// Write a report response to stdout
pub fn write_report(report: &str, data: Value) -> CliResult<()> {
    write_line(&Response::report(report, data).to_json())
}

/// Write an error response to stdout
pub fn write_error(err: &ApiError) -> CliResult<()> {
    write_line(&Response::error(err).to_json())
}

fn write_line(json: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
