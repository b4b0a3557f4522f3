//! JSON-backed records and snapshots.
//!
//! A snapshot is one collection of records captured at one point in time.
//! On disk it is either a bare JSON array of objects or an envelope carrying
//! a format version:
//!
//! ```json
//! { "formatVersion": 1, "records": [{ "id": 1, "name": "Alice" }] }
//! ```
//!
//! Every object may carry a numeric `id`. A missing `id` means the record has
//! not been persisted yet and is read as identity 0.

use crate::{error::Result, Error, Id, Identifiable, MutableIdentifiable, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version of the snapshot envelope format.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// A record whose content is an arbitrary JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRecord {
    /// Identity of the record (0 if not yet assigned)
    #[serde(default)]
    pub id: Id,
    /// Every other field of the object
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl JsonRecord {
    /// Create a record from an identity and its fields.
    pub fn new(id: Id, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Build a record from a JSON value.
    ///
    /// The value must be an object; its `id` key, if present, becomes the
    /// identity.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::InvalidSnapshot(e.to_string()))
    }

    /// Get a field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

impl Identifiable for JsonRecord {
    fn id(&self) -> Id {
        self.id
    }
}

impl MutableIdentifiable for JsonRecord {
    fn set_id(&mut self, id: Id) {
        self.id = id;
    }
}

/// A point-in-time collection of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Snapshot format version
    pub format_version: u32,
    /// Records in load order
    pub records: Vec<JsonRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotRepr {
    Bare(Vec<JsonRecord>),
    Envelope(Snapshot),
}

impl Snapshot {
    /// Create a snapshot from records.
    pub fn new(records: Vec<JsonRecord>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            records,
        }
    }

    /// Records in load order.
    pub fn records(&self) -> &[JsonRecord] {
        &self.records
    }

    /// Number of records, duplicates included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of this snapshot without records that have no identity yet.
    ///
    /// The delta itself treats identity 0 like any other value, so callers
    /// that want unsaved records left out filter them here first.
    pub fn without_unassigned(&self) -> Self {
        let records: Vec<JsonRecord> = self
            .records
            .iter()
            .filter(|r| r.id != UNASSIGNED_ID)
            .cloned()
            .collect();
        if records.len() != self.records.len() {
            tracing::debug!(
                skipped = self.records.len() - records.len(),
                "dropped unassigned records"
            );
        }
        Self {
            format_version: self.format_version,
            records,
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserialize from JSON, accepting a bare array or an envelope.
    pub fn from_json(json: &str) -> Result<Self> {
        let repr: SnapshotRepr = serde_json::from_str(json).map_err(|e| {
            Error::InvalidSnapshot(format!(
                "expected an array of objects or a snapshot envelope: {e}"
            ))
        })?;

        let snapshot = match repr {
            SnapshotRepr::Bare(records) => Self::new(records),
            SnapshotRepr::Envelope(snapshot) => snapshot,
        };

        if snapshot.format_version > SNAPSHOT_FORMAT_VERSION {
            return Err(Error::InvalidSnapshot(format!(
                "unsupported snapshot format version: {} (max supported: {})",
                snapshot.format_version, SNAPSHOT_FORMAT_VERSION
            )));
        }

        tracing::debug!(records = snapshot.len(), "loaded snapshot");
        Ok(snapshot)
    }
}
