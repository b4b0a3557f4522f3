//! # iddelta Engine
//!
//! Deterministic delta between two snapshots of identity-bearing records.
//!
//! Given what existed before and what exists now, the engine classifies every
//! record as removed, added or retained, and pairs the old and new versions of
//! each retained record. Callers use it to detect creates, updates and deletes
//! between two loads of the same logical collection.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine never touches files, network or storage
//! - **Deterministic**: results ascend by identity, whatever the input order
//! - **Total**: absent collections and identities give empty results, never errors
//! - **Classify only**: nothing here acts on the delta
//!
//! ## Core Concepts
//!
//! ### Identity
//!
//! Records implement [`Identifiable`], exposing a numeric [`Id`]. Identity `0`
//! ([`UNASSIGNED_ID`]) marks a record that has not been persisted yet; the
//! delta treats it like any other identity.
//!
//! ### Identity Index
//!
//! The [`index`] module resolves between records and identities: extraction,
//! lookup, grouping, in-place removal and explicit ordering ([`ExplicitOrder`]).
//!
//! ### Deltas
//!
//! - [`IdDelta`] - removed, added and retained identities
//! - [`RecordDelta`] - the same, resolved back to records, with `(old, new)`
//!   pairs for retained identities
//!
//! ## Quick Start
//!
//! ```rust
//! use iddelta_engine::{Id, Identifiable, RecordDelta};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     id: Id,
//!     name: String,
//! }
//!
//! impl Identifiable for User {
//!     fn id(&self) -> Id {
//!         self.id
//!     }
//! }
//!
//! let user = |id: Id, name: &str| User { id, name: name.to_string() };
//!
//! let before = vec![user(1, "Alice"), user(2, "Bob")];
//! let after = vec![user(2, "Robert"), user(3, "Carol")];
//!
//! let delta = RecordDelta::new(&before, &after);
//! assert_eq!(delta.removed_ids(), &[1]);
//! assert_eq!(delta.added_ids(), &[3]);
//! assert_eq!(delta.intersection()[0].1.name, "Robert");
//! assert_eq!(delta.changed().count(), 1);
//! ```
//!
//! ## Snapshots
//!
//! [`Snapshot`] and [`JsonRecord`] load JSON collections, and [`DeltaReport`]
//! summarizes a delta for output.

pub mod error;
pub mod id_delta;
pub mod identity;
pub mod index;
pub mod record_delta;
pub mod report;
pub mod snapshot;

// Re-export main types at crate root
pub use error::Error;
pub use id_delta::IdDelta;
pub use identity::{
    equals_id, same_id, Identifiable, MaybeIdentified, MutableIdentifiable, UNASSIGNED_ID,
};
pub use index::ExplicitOrder;
pub use record_delta::RecordDelta;
pub use report::DeltaReport;
pub use snapshot::{JsonRecord, Snapshot, SNAPSHOT_FORMAT_VERSION};

/// Numeric identity of a record.
pub type Id = u64;
