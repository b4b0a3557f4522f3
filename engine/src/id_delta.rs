//! Set difference over two collections of raw identities.
//!
//! # Algorithm
//!
//! 1. Normalise both inputs into ordered, duplicate-free sets
//! 2. `removed = old - new`
//! 3. `added = new - old`
//! 4. `intersection = old - removed`
//!
//! Results ascend by identity value, so the outcome never depends on the
//! order or multiplicity of the inputs.

use crate::{Error, Id};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;

/// Classification of identities into removed, added and retained.
///
/// Deserialized values are checked: every list must ascend strictly and no
/// identity may appear in more than one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "IdDeltaRepr")]
pub struct IdDelta {
    removed_ids: Vec<Id>,
    added_ids: Vec<Id>,
    intersection_ids: Vec<Id>,
}

impl IdDelta {
    /// Compare `old_ids` against `new_ids`.
    ///
    /// An empty input stands for an absent collection.
    pub fn new<O, N>(old_ids: O, new_ids: N) -> Self
    where
        O: IntoIterator,
        O::Item: Borrow<Id>,
        N: IntoIterator,
        N::Item: Borrow<Id>,
    {
        let old: BTreeSet<Id> = old_ids.into_iter().map(|id| *id.borrow()).collect();
        let new: BTreeSet<Id> = new_ids.into_iter().map(|id| *id.borrow()).collect();

        let removed_ids: Vec<Id> = old.difference(&new).copied().collect();
        let added_ids: Vec<Id> = new.difference(&old).copied().collect();
        let intersection_ids: Vec<Id> = old.intersection(&new).copied().collect();

        tracing::debug!(
            removed = removed_ids.len(),
            added = added_ids.len(),
            retained = intersection_ids.len(),
            "computed id delta"
        );

        Self {
            removed_ids,
            added_ids,
            intersection_ids,
        }
    }

    /// Identities present in the old collection but missing from the new one.
    pub fn removed_ids(&self) -> &[Id] {
        &self.removed_ids
    }

    /// Identities present in the new collection but missing from the old one.
    pub fn added_ids(&self) -> &[Id] {
        &self.added_ids
    }

    /// Identities present in both collections.
    pub fn intersection_ids(&self) -> &[Id] {
        &self.intersection_ids
    }

    /// True if anything was added or removed.
    ///
    /// Retained identities alone never count as a delta.
    pub fn has_delta(&self) -> bool {
        !self.removed_ids.is_empty() || !self.added_ids.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdDeltaRepr {
    removed_ids: Vec<Id>,
    added_ids: Vec<Id>,
    intersection_ids: Vec<Id>,
}

impl TryFrom<IdDeltaRepr> for IdDelta {
    type Error = Error;

    fn try_from(repr: IdDeltaRepr) -> Result<Self, Self::Error> {
        let lists = [
            ("removedIds", &repr.removed_ids),
            ("addedIds", &repr.added_ids),
            ("intersectionIds", &repr.intersection_ids),
        ];
        for (name, ids) in lists {
            if !ids.windows(2).all(|w| w[0] < w[1]) {
                return Err(Error::InvalidDelta(format!(
                    "{} must be strictly ascending",
                    name
                )));
            }
        }

        let total = repr.removed_ids.len() + repr.added_ids.len() + repr.intersection_ids.len();
        let distinct: BTreeSet<Id> = repr
            .removed_ids
            .iter()
            .chain(&repr.added_ids)
            .chain(&repr.intersection_ids)
            .copied()
            .collect();
        if distinct.len() != total {
            return Err(Error::InvalidDelta(
                "an identity appears in more than one list".into(),
            ));
        }

        Ok(Self {
            removed_ids: repr.removed_ids,
            added_ids: repr.added_ids,
            intersection_ids: repr.intersection_ids,
        })
    }
}
