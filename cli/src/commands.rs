//! Command execution.

use crate::args::Command;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::render;
use iddelta_engine::{DeltaReport, IdDelta, RecordDelta, Snapshot};
use std::path::Path;

/// Run a command and return the text to print.
pub fn run(command: Command, config: Config) -> Result<String> {
    match command {
        Command::Diff {
            old,
            new,
            format,
            skip_unassigned,
        } => {
            let config = config.with_overrides(format, skip_unassigned);
            diff(&old, &new, &config)
        }
        Command::Ids { old, new, format } => {
            let config = config.with_overrides(format, false);
            let delta = IdDelta::new(&old, &new);
            render::id_delta(&delta, config.format)
        }
    }
}

fn diff(old_path: &Path, new_path: &Path, config: &Config) -> Result<String> {
    let mut old = load_snapshot(old_path)?;
    let mut new = load_snapshot(new_path)?;

    if config.skip_unassigned {
        old = old.without_unassigned();
        new = new.without_unassigned();
    }

    let delta = RecordDelta::new(old.records(), new.records());
    let report = DeltaReport::from_delta(&delta);

    tracing::info!(
        removed = report.removed.len(),
        added = report.added.len(),
        changed = report.changed.len(),
        "compared snapshots"
    );

    render::report(&report, config.format)
}

fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let json = std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = json.len(), "read snapshot file");
    Ok(Snapshot::from_json(&json)?)
}
