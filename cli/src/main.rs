//! iddelta CLI - compare two snapshots of identity-bearing records.
//!
//! Loads snapshots from JSON files (or takes raw identity lists) and prints
//! which identities were removed, added, changed or retained, using the
//! iddelta-engine classification.

mod args;
mod commands;
mod config;
mod error;
mod render;

use crate::args::Cli;
use crate::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iddelta_cli=info,iddelta_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse_args();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    match commands::run(cli.command, config) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}", e);
            Err(e.into())
        }
    }
}
