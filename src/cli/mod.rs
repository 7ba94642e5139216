//! CLI module for orgdb
//!
//! Provides the command-line interface:
//! - init: write a starter dataset file
//! - validate: load a dataset and report collection counts
//! - query: one-shot report execution from a stdin request
//! - run: execute all seven reports

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, query, run, run_all, run_command, validate};
pub use errors::{CliError, CliResult};
pub use io::{read_request_line, write_error, write_report};
