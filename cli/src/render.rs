//! Output rendering for delta results.

use crate::config::OutputFormat;
use crate::error::Result;
use iddelta_engine::{DeltaReport, Id, IdDelta};
use std::fmt::Write;

/// Render a record-level report.
pub fn report(report: &DeltaReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(report.to_json_pretty()?),
        OutputFormat::Text => {
            let mut out = String::new();
            line(&mut out, "removed", &report.removed);
            line(&mut out, "added", &report.added);
            line(&mut out, "changed", &report.changed);
            line(&mut out, "unchanged", &report.unchanged);
            delta_line(&mut out, report.has_delta);
            Ok(out)
        }
    }
}

/// Render an identity-level delta.
pub fn id_delta(delta: &IdDelta, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(delta)?),
        OutputFormat::Text => {
            let mut out = String::new();
            line(&mut out, "removed", delta.removed_ids());
            line(&mut out, "added", delta.added_ids());
            line(&mut out, "retained", delta.intersection_ids());
            delta_line(&mut out, delta.has_delta());
            Ok(out)
        }
    }
}

fn line(out: &mut String, label: &str, ids: &[Id]) {
    let joined = if ids.is_empty() {
        "(none)".to_string()
    } else {
        ids.iter()
            .map(Id::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out, "{:<10} {}", format!("{}:", label), joined);
}

fn delta_line(out: &mut String, has_delta: bool) {
    let _ = writeln!(
        out,
        "{:<10} {}",
        "delta:",
        if has_delta { "yes" } else { "no" }
    );
}
