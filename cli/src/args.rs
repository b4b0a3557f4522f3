//! CLI argument definitions using clap
//!
//! Commands:
//! - iddelta diff <OLD> <NEW> [--format text|json] [--skip-unassigned]
//! - iddelta ids --old 1,2,3 --new 2,3,4 [--format text|json]

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use iddelta_engine::Id;
use std::path::PathBuf;

/// iddelta - classify records as removed, added or retained between two snapshots
#[derive(Parser, Debug)]
#[command(name = "iddelta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Compare two JSON snapshot files
    Diff {
        /// Snapshot captured before
        old: PathBuf,

        /// Snapshot captured now
        new: PathBuf,

        /// Output format (overrides IDDELTA_FORMAT)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Leave out records without an identity before comparing
        #[arg(long)]
        skip_unassigned: bool,
    },

    /// Compare two comma-separated identity lists
    Ids {
        /// Identities captured before
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        old: Vec<Id>,

        /// Identities captured now
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        new: Vec<Id>,

        /// Output format (overrides IDDELTA_FORMAT)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
