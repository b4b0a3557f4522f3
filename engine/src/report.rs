//! Serializable summary of a record delta.

use crate::{error::Result, Error, Id, Identifiable, RecordDelta};
use serde::{Deserialize, Serialize};

/// Identities classified by a [`RecordDelta`], ready to be printed or shipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaReport {
    /// Identities only in the old snapshot
    pub removed: Vec<Id>,
    /// Identities only in the new snapshot
    pub added: Vec<Id>,
    /// Retained identities whose first records differ
    pub changed: Vec<Id>,
    /// Retained identities whose first records are equal
    pub unchanged: Vec<Id>,
    /// Whether anything was added or removed
    pub has_delta: bool,
}

impl DeltaReport {
    /// Summarize `delta`.
    pub fn from_delta<O, N>(delta: &RecordDelta<O, N>) -> Self
    where
        O: Identifiable + PartialEq<N>,
    {
        Self {
            removed: delta.removed_ids().to_vec(),
            added: delta.added_ids().to_vec(),
            changed: delta.changed().map(|(old, _)| old.id()).collect(),
            unchanged: delta.unchanged().map(|(old, _)| old.id()).collect(),
            has_delta: delta.has_delta(),
        }
    }

    /// True if retained records changed content or anything was added or removed.
    pub fn has_changes(&self) -> bool {
        self.has_delta || !self.changed.is_empty()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl<O, N> From<&RecordDelta<O, N>> for DeltaReport
where
    O: Identifiable + PartialEq<N>,
{
    fn from(delta: &RecordDelta<O, N>) -> Self {
        Self::from_delta(delta)
    }
}
