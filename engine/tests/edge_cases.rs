//! Edge case tests for iddelta-engine
//!
//! These tests cover boundary conditions and unusual inputs.

use iddelta_engine::index::{
    contains_id, extract_ids, find_all_by_ids, find_by_id, group_by_id, remove_by_ids, same_ids,
};
use iddelta_engine::{
    DeltaReport, ExplicitOrder, Id, IdDelta, Identifiable, JsonRecord, MutableIdentifiable,
    RecordDelta, Snapshot,
};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct Entity {
    id: Id,
    label: String,
}

impl Identifiable for Entity {
    fn id(&self) -> Id {
        self.id
    }
}

impl MutableIdentifiable for Entity {
    fn set_id(&mut self, id: Id) {
        self.id = id;
    }
}

fn e(id: Id) -> Entity {
    Entity {
        id,
        label: format!("entity-{}", id),
    }
}

// ============================================================================
// Documented Scenarios
// ============================================================================

#[test]
fn scenario_partial_overlap() {
    let d = IdDelta::new([1u64, 2, 3, 4], [3u64, 4, 5, 6]);
    assert_eq!(d.removed_ids(), &[1, 2]);
    assert_eq!(d.intersection_ids(), &[3, 4]);
    assert_eq!(d.added_ids(), &[5, 6]);
    assert!(d.has_delta());
}

#[test]
fn scenario_permuted() {
    let d = IdDelta::new([1u64, 2, 3, 4], [3u64, 4, 1, 2]);
    assert!(d.removed_ids().is_empty());
    assert_eq!(d.intersection_ids(), &[1, 2, 3, 4]);
    assert!(d.added_ids().is_empty());
    assert!(!d.has_delta());
}

#[test]
fn scenario_absent_old() {
    let absent: Option<Vec<Id>> = None;
    let d = IdDelta::new(absent.into_iter().flatten(), [3u64, 4, 1, 2]);
    assert!(d.removed_ids().is_empty());
    assert!(d.intersection_ids().is_empty());
    assert_eq!(d.added_ids(), &[1, 2, 3, 4]);
    assert!(d.has_delta());
}

#[test]
fn scenario_record_delta() {
    let d = RecordDelta::new(&[e(1), e(2)], &[e(2), e(3)]);
    assert_eq!(d.removed(), &[e(1)]);
    assert_eq!(d.intersection(), &[(e(2), e(2))]);
    assert_eq!(d.added(), &[e(3)]);
}

#[test]
fn scenario_remove_with_absent_entries() {
    let mut records = vec![Some(e(1)), Some(e(2)), None];
    remove_by_ids(&mut records, [1u64]);
    assert_eq!(records, vec![Some(e(2)), None]);
}

// ============================================================================
// Identity Boundaries
// ============================================================================

#[test]
fn identity_extremes() {
    let d = IdDelta::new([0u64, u64::MAX], [u64::MAX, 1]);
    assert_eq!(d.removed_ids(), &[0]);
    assert_eq!(d.intersection_ids(), &[u64::MAX]);
    assert_eq!(d.added_ids(), &[1]);
}

#[test]
fn unassigned_records_pair_with_each_other() {
    let mut draft_a = e(0);
    draft_a.label = "draft-a".into();
    let mut draft_b = e(0);
    draft_b.label = "draft-b".into();

    let d = RecordDelta::new(&[draft_a.clone()], &[draft_b.clone()]);
    assert_eq!(d.intersection(), &[(draft_a, draft_b)]);
    assert!(!d.has_delta());
}

#[test]
fn assigning_identity_moves_record_between_sets() {
    let old = vec![e(1)];
    let mut new = vec![e(1), e(0)];
    assert_eq!(RecordDelta::new(&old, &new).added_ids(), &[0]);

    new[1].set_id(2);
    assert!(new[1].is_existing());
    assert_eq!(RecordDelta::new(&old, &new).added_ids(), &[2]);
}

// ============================================================================
// Duplicates and Absent Values
// ============================================================================

#[test]
fn duplicate_identities_in_removed_and_added() {
    let old = vec![e(1), e(1), e(2)];
    let new = vec![e(2), e(3), e(3)];
    let d = RecordDelta::new(&old, &new);

    assert_eq!(d.removed(), &[e(1), e(1)]);
    assert_eq!(d.added(), &[e(3), e(3)]);
    assert_eq!(d.intersection().len(), 1);
}

#[test]
fn absent_records_in_index_operations() {
    let records = vec![None, Some(e(4)), None, Some(e(2))];

    assert_eq!(extract_ids(&records).len(), 3);
    assert!(find_by_id(&records, None::<Id>).is_none());
    assert_eq!(find_all_by_ids(&records, [None::<Id>]).len(), 2);
    assert!(contains_id(&records, 4u64));
    assert_eq!(group_by_id(&records).len(), 2);
}

#[test]
fn same_ids_across_record_types() {
    let records = vec![e(1), e(2)];
    let json: Vec<JsonRecord> = vec![
        JsonRecord::from_value(json!({"id": 2})).unwrap(),
        JsonRecord::from_value(json!({"id": 1, "extra": null})).unwrap(),
    ];
    assert!(same_ids(&records, &json));
}

#[test]
fn explicit_order_with_duplicates_and_unknowns() {
    let mut records = vec![e(30), e(10), e(99), e(20), e(10)];
    let order = ExplicitOrder::new([10u64, 20, 30]);
    order.sort(&mut records);

    let ids: Vec<Id> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 99, 10, 20, 30]);
}

// ============================================================================
// Large Inputs
// ============================================================================

#[test]
fn large_reversed_input_is_ascending() {
    let old: Vec<Id> = (0..10_000u64).rev().collect();
    let new: Vec<Id> = (5_000..15_000u64).rev().collect();
    let d = IdDelta::new(&old, &new);

    assert_eq!(d.removed_ids().len(), 5_000);
    assert_eq!(d.added_ids().len(), 5_000);
    assert_eq!(d.intersection_ids().len(), 5_000);
    assert!(d.intersection_ids().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(d.removed_ids().first(), Some(&0));
    assert_eq!(d.added_ids().last(), Some(&14_999));
}

#[test]
fn large_reversed_snapshot_pairs_every_record() {
    let old: Vec<Entity> = (0..50_000u64).map(e).collect();
    let new: Vec<Entity> = (0..50_000u64).rev().map(e).collect();
    let d = RecordDelta::new(&old, &new);

    assert!(!d.has_delta());
    assert_eq!(d.intersection().len(), 50_000);
    assert!(d.intersection().iter().all(|(a, b)| a == b));
    assert_eq!(d.intersection()[0].0.id, 0);
    assert_eq!(d.intersection()[49_999].1.id, 49_999);
}

// ============================================================================
// JSON Snapshots
// ============================================================================

#[test]
fn json_snapshots_end_to_end() {
    let old = Snapshot::from_json(
        r#"[
            {"id": 1, "title": "Buy milk", "done": false},
            {"id": 2, "title": "Walk dog", "done": false},
            {"title": "Unsaved"}
        ]"#,
    )
    .unwrap();
    let new = Snapshot::from_json(
        r#"{"formatVersion": 1, "records": [
            {"id": 2, "title": "Walk dog", "done": true},
            {"id": 3, "title": "Read book"}
        ]}"#,
    )
    .unwrap();

    let all = DeltaReport::from_delta(&RecordDelta::new(old.records(), new.records()));
    assert_eq!(all.removed, vec![0, 1]);

    let old = old.without_unassigned();
    let delta = RecordDelta::new(old.records(), new.records());
    let report = DeltaReport::from(&delta);

    assert_eq!(report.removed, vec![1]);
    assert_eq!(report.added, vec![3]);
    assert_eq!(report.changed, vec![2]);
    assert!(report.unchanged.is_empty());

    let (before, after) = &delta.intersection()[0];
    assert_eq!(before.get("done"), Some(&json!(false)));
    assert_eq!(after.get("done"), Some(&json!(true)));
}

#[test]
fn unicode_and_nested_fields_compare_by_content() {
    let old = Snapshot::from_json(r#"[{"id": 1, "name": "日本語", "meta": {"a": [1, 2]}}]"#).unwrap();
    let same = Snapshot::from_json(r#"[{"meta": {"a": [1, 2]}, "name": "日本語", "id": 1}]"#).unwrap();
    let report = DeltaReport::from_delta(&RecordDelta::new(old.records(), same.records()));

    assert!(!report.has_changes());
}
