//! Record-level delta between an old and a new snapshot.
//!
//! Builds on [`IdDelta`]: identities are classified first, then each
//! identity is resolved back to the records carrying it.
//!
//! # Duplicate identities
//!
//! Removed and added records include every record with a matching identity.
//! Retained pairs use the first record of each side for an identity; later
//! records sharing that identity do not appear in [`RecordDelta::intersection`].

use crate::{index, Id, IdDelta, Identifiable};

/// Removed, added and retained records between two snapshots.
///
/// The old and new record types are independent, so a persisted entity type
/// can be compared against a freshly built one as long as both expose an
/// identity.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDelta<O, N> {
    ids: IdDelta,
    removed: Vec<O>,
    added: Vec<N>,
    intersection: Vec<(O, N)>,
    old_records: Vec<O>,
    new_records: Vec<N>,
}

impl<O, N> RecordDelta<O, N>
where
    O: Identifiable + Clone,
    N: Identifiable + Clone,
{
    /// Compare `old_records` against `new_records`.
    ///
    /// Both collections are copied; later changes to them do not affect the
    /// result.
    pub fn new(old_records: &[O], new_records: &[N]) -> Self {
        let ids = IdDelta::new(
            index::extract_ids(old_records).into_iter().flatten(),
            index::extract_ids(new_records).into_iter().flatten(),
        );

        let removed = index::find_all_by_ids(old_records, ids.removed_ids().iter().copied())
            .into_iter()
            .cloned()
            .collect();
        let added = index::find_all_by_ids(new_records, ids.added_ids().iter().copied())
            .into_iter()
            .cloned()
            .collect();

        let old_groups = index::group_by_id(old_records);
        let new_groups = index::group_by_id(new_records);
        let intersection = ids
            .intersection_ids()
            .iter()
            .filter_map(|id| {
                let old = *old_groups.get(id)?.first()?;
                let new = *new_groups.get(id)?.first()?;
                Some((old.clone(), new.clone()))
            })
            .collect();

        Self {
            ids,
            removed,
            added,
            intersection,
            old_records: old_records.to_vec(),
            new_records: new_records.to_vec(),
        }
    }
}

impl<O, N> RecordDelta<O, N> {
    /// The underlying identity classification.
    pub fn id_delta(&self) -> &IdDelta {
        &self.ids
    }

    /// Identities of removed records, ascending.
    pub fn removed_ids(&self) -> &[Id] {
        self.ids.removed_ids()
    }

    /// Identities of added records, ascending.
    pub fn added_ids(&self) -> &[Id] {
        self.ids.added_ids()
    }

    /// Identities present on both sides, ascending.
    pub fn intersection_ids(&self) -> &[Id] {
        self.ids.intersection_ids()
    }

    /// True if any record was added or removed.
    pub fn has_delta(&self) -> bool {
        self.ids.has_delta()
    }

    /// Old records whose identity is missing from the new snapshot.
    pub fn removed(&self) -> &[O] {
        &self.removed
    }

    /// New records whose identity is missing from the old snapshot.
    pub fn added(&self) -> &[N] {
        &self.added
    }

    /// `(old, new)` pairs for every retained identity, ascending by identity.
    pub fn intersection(&self) -> &[(O, N)] {
        &self.intersection
    }

    /// Copy of the old snapshot as it was when the delta was computed.
    pub fn old_records(&self) -> &[O] {
        &self.old_records
    }

    /// Copy of the new snapshot as it was when the delta was computed.
    pub fn new_records(&self) -> &[N] {
        &self.new_records
    }
}

impl<O, N> RecordDelta<O, N>
where
    O: PartialEq<N>,
{
    /// Retained pairs whose content differs.
    pub fn changed(&self) -> impl Iterator<Item = &(O, N)> {
        self.intersection.iter().filter(|(old, new)| old != new)
    }

    /// Retained pairs whose content is equal.
    pub fn unchanged(&self) -> impl Iterator<Item = &(O, N)> {
        self.intersection.iter().filter(|(old, new)| old == new)
    }
}
