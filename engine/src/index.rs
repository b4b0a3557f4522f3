//! Lookups and derived views over collections of identity-bearing records.
//!
//! Every function here is total. An empty slice stands for an absent
//! collection, and an absent identity (`None`) is a value like any other:
//! it only matches absent records.
//!
//! Identity arguments accept either a bare [`Id`] or an `Option<Id>`.

use crate::{Id, MaybeIdentified};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Collect the distinct identities of `records`.
///
/// Absent records contribute `None`.
pub fn extract_ids<R: MaybeIdentified>(records: &[R]) -> BTreeSet<Option<Id>> {
    records.iter().map(MaybeIdentified::identity).collect()
}

/// Collect the identities of `records` in input order, duplicates included.
pub fn extract_ids_ordered<R: MaybeIdentified>(records: &[R]) -> Vec<Option<Id>> {
    records.iter().map(MaybeIdentified::identity).collect()
}

/// Find the first record with identity `id`.
///
/// Returns `None` when nothing matches or when `id` itself is absent.
pub fn find_by_id<R: MaybeIdentified>(records: &[R], id: impl Into<Option<Id>>) -> Option<&R> {
    let id = id.into()?;
    records.iter().find(|r| r.identity() == Some(id))
}

/// Find the first record sharing an identity with `probe`.
pub fn find_by_record<'a, R, P>(records: &'a [R], probe: &P) -> Option<&'a R>
where
    R: MaybeIdentified,
    P: MaybeIdentified + ?Sized,
{
    find_by_id(records, probe.identity())
}

/// Return every record whose identity is one of `ids`, in input order.
///
/// Records sharing an identity are all returned.
pub fn find_all_by_ids<R, I>(records: &[R], ids: I) -> Vec<&R>
where
    R: MaybeIdentified,
    I: IntoIterator,
    I::Item: Into<Option<Id>>,
{
    let wanted = collect_ids(ids);
    if wanted.is_empty() || records.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|r| wanted.contains(&r.identity()))
        .collect()
}

/// Check whether any record has identity `id`.
pub fn contains_id<R: MaybeIdentified>(records: &[R], id: impl Into<Option<Id>>) -> bool {
    find_by_id(records, id).is_some()
}

/// Check whether any record shares an identity with `probe`.
pub fn contains_record<R, P>(records: &[R], probe: &P) -> bool
where
    R: MaybeIdentified,
    P: MaybeIdentified + ?Sized,
{
    find_by_record(records, probe).is_some()
}

/// Remove, in place, every record whose identity is one of `ids`.
///
/// The caller's vector is modified and handed back. Relative order of the
/// remaining records is preserved. Absent records are only removed if `ids`
/// contains an absent identity.
pub fn remove_by_ids<R, I>(records: &mut Vec<R>, ids: I) -> &mut Vec<R>
where
    R: MaybeIdentified,
    I: IntoIterator,
    I::Item: Into<Option<Id>>,
{
    if records.is_empty() {
        return records;
    }
    let doomed = collect_ids(ids);
    if !doomed.is_empty() {
        records.retain(|r| !doomed.contains(&r.identity()));
    }
    records
}

/// Group records by identity, in ascending identity order.
///
/// Records sharing an identity are kept in input order. Absent records are
/// skipped.
pub fn group_by_id<R: MaybeIdentified>(records: &[R]) -> BTreeMap<Id, Vec<&R>> {
    let mut groups: BTreeMap<Id, Vec<&R>> = BTreeMap::new();
    for record in records {
        if let Some(id) = record.identity() {
            groups.entry(id).or_default().push(record);
        }
    }
    groups
}

/// Check whether two collections hold the same set of identities.
///
/// Duplicates are collapsed before comparing.
pub fn same_ids<A: MaybeIdentified, B: MaybeIdentified>(a: &[A], b: &[B]) -> bool {
    extract_ids(a) == extract_ids(b)
}

fn collect_ids<I>(ids: I) -> BTreeSet<Option<Id>>
where
    I: IntoIterator,
    I::Item: Into<Option<Id>>,
{
    ids.into_iter().map(Into::into).collect()
}

/// Orders records by the position of their identity in an explicit list.
///
/// A record ranks at the first position its identity appears in the list.
/// Identities missing from the list rank 0, tied with the first entry. An
/// absent record is ranked as if it had identity 0.
#[derive(Debug, Clone, Default)]
pub struct ExplicitOrder {
    ranks: HashMap<Id, usize>,
}

impl ExplicitOrder {
    /// Build an order from `ordered_ids`. Absent entries only occupy a position.
    pub fn new<I>(ordered_ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<Id>>,
    {
        let mut ranks = HashMap::new();
        for (position, id) in ordered_ids.into_iter().enumerate() {
            if let Some(id) = id.into() {
                ranks.entry(id).or_insert(position);
            }
        }
        Self { ranks }
    }

    /// Rank of a record in this order.
    pub fn rank<R: MaybeIdentified + ?Sized>(&self, record: &R) -> usize {
        let id = record.identity().unwrap_or(crate::UNASSIGNED_ID);
        self.ranks.get(&id).copied().unwrap_or(0)
    }

    /// Compare two records by rank.
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: MaybeIdentified + ?Sized,
        B: MaybeIdentified + ?Sized,
    {
        self.rank(a).cmp(&self.rank(b))
    }

    /// Sort `records` by rank. Ties keep their input order.
    pub fn sort<R: MaybeIdentified>(&self, records: &mut [R]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}
