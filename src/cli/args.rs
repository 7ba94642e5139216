//! CLI argument definitions using clap
//!
//! Commands:
//! - orgdb init --data <path>
//! - orgdb validate --data <path>
//! - orgdb query --data <path>
//! - orgdb run --data <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// orgdb - A strict, deterministic, in-memory organization database and
/// reporting engine
#[derive(Parser, Debug)]
#[command(name = "orgdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter dataset file
    Init {
        /// Path to the dataset file
        #[arg(long, default_value = "./company.json")]
        data: PathBuf,
    },

    /// Load a dataset and print collection counts
    Validate {
        /// Path to the dataset file
        #[arg(long, default_value = "./company.json")]
        data: PathBuf,
    },

    /// Execute a single report request from stdin and exit
    Query {
        /// Path to the dataset file
        #[arg(long, default_value = "./company.json")]
        data: PathBuf,
    },

    /// Execute all seven reports and exit
    Run {
        /// Path to the dataset file
        #[arg(long, default_value = "./company.json")]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
