// SPDX-License-Identifier: MIT OR Apache-2.0
//! Processing-test record diff
//!
//! Aligns two sequences of `processing_tests` records by positional
//! index and reports per-record differences over a fixed set of tracked
//! fields. Alignment is deliberately positional, not by `test_id`:
//! reordered sequences produce spurious diffs, and the surrounding
//! tooling assumes index-aligned tries.
//!
//! The operation never fails. An absent sequence is treated as empty; a
//! present but non-array member degrades the whole diff to an empty
//! result, since this feeds into an otherwise successful comparison.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::equal::strict_eq;
use crate::shallow::DiffEntry;

/// Record fields compared by the processing-test diff. Anything else a
/// record carries (results, related log ids) is ignored.
pub const TRACKED_FIELDS: [&str; 5] = [
    "test_id",
    "description",
    "mentor_gpsm",
    "student_gpsm",
    "objective",
];

/// Differences for one index-aligned record pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingTestDiff {
    /// `test_id` of the first record, falling back to the second when
    /// the first side is missing at this index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<Value>,
    /// Tracked fields that differ, with the value on each side.
    pub differences: BTreeMap<&'static str, DiffEntry>,
}

/// Diff two `processing_tests` members.
///
/// Records are aligned by index over `0..max(len_a, len_b)`; a missing
/// record on either side reads as an empty one, so every tracked field
/// on that side is absent. Tracked fields compare with [`strict_eq`]:
/// absent versus present differs, and composite field values from two
/// distinct parses always differ. An entry is emitted only when at
/// least one tracked field differs.
#[must_use]
pub fn diff_processing_tests(a: Option<&Value>, b: Option<&Value>) -> Vec<ProcessingTestDiff> {
    let (Some(seq_a), Some(seq_b)) = (as_records(a), as_records(b)) else {
        return Vec::new();
    };

    let mut diffs = Vec::new();
    for index in 0..seq_a.len().max(seq_b.len()) {
        let rec_a = seq_a.get(index);
        let rec_b = seq_b.get(index);

        let mut differences = BTreeMap::new();
        for field in TRACKED_FIELDS {
            let va = rec_a.and_then(|rec| rec.get(field));
            let vb = rec_b.and_then(|rec| rec.get(field));
            if !field_matches(va, vb) {
                differences.insert(
                    field,
                    DiffEntry {
                        a: va.cloned(),
                        b: vb.cloned(),
                    },
                );
            }
        }

        if !differences.is_empty() {
            let test_id = rec_a
                .and_then(|rec| rec.get("test_id"))
                .or_else(|| rec_b.and_then(|rec| rec.get("test_id")))
                .cloned();
            diffs.push(ProcessingTestDiff {
                test_id,
                differences,
            });
        }
    }
    diffs
}

/// Absent member reads as an empty sequence; a present non-array member
/// is a shape failure and yields `None` (fail soft).
fn as_records(value: Option<&Value>) -> Option<&[Value]> {
    match value {
        None => Some(&[]),
        Some(Value::Array(items)) => Some(items.as_slice()),
        Some(_) => None,
    }
}

fn field_matches(va: Option<&Value>, vb: Option<&Value>) -> bool {
    match (va, vb) {
        (Some(x), Some(y)) => strict_eq(x, y),
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reports_changed_tracked_field() {
        let a = json!([{"test_id": "1", "description": "a"}]);
        let b = json!([{"test_id": "1", "description": "b"}]);
        let diffs = diff_processing_tests(Some(&a), Some(&b));

        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].test_id, Some(json!("1")));
        assert_eq!(diffs[0].differences.len(), 1);
        let entry = &diffs[0].differences["description"];
        assert_eq!(entry.a, Some(json!("a")));
        assert_eq!(entry.b, Some(json!("b")));
    }

    #[test]
    fn identical_records_emit_nothing() {
        let a = json!([{"test_id": "1", "description": "a", "objective": "o"}]);
        let b = json!([{"test_id": "1", "description": "a", "objective": "o"}]);
        let diffs = diff_processing_tests(Some(&a), Some(&b));
        assert!(diffs.is_empty());
    }

    #[test]
    fn missing_record_reads_as_empty() {
        let a = json!([]);
        let b = json!([{"test_id": "2", "description": "d", "mentor_gpsm": "m",
                        "student_gpsm": "s", "objective": "o"}]);
        let diffs = diff_processing_tests(Some(&a), Some(&b));

        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].test_id, Some(json!("2")));
        assert_eq!(diffs[0].differences.len(), TRACKED_FIELDS.len());
        for field in TRACKED_FIELDS {
            let entry = &diffs[0].differences[field];
            assert_eq!(entry.a, None);
            assert!(entry.b.is_some());
        }
    }

    #[test]
    fn absent_member_is_an_empty_sequence() {
        let b = json!([{"test_id": "2"}]);
        let diffs = diff_processing_tests(None, Some(&b));
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].test_id, Some(json!("2")));
    }

    #[test]
    fn non_array_member_fails_soft() {
        let a = json!("not a sequence");
        let b = json!([{"test_id": "2"}]);
        assert!(diff_processing_tests(Some(&a), Some(&b)).is_empty());
        assert!(diff_processing_tests(Some(&b), Some(&a)).is_empty());
    }

    #[test]
    fn untracked_fields_are_ignored() {
        let a = json!([{"test_id": "1", "result": ["pass"], "related_eval_log_id": "x"}]);
        let b = json!([{"test_id": "1", "result": ["fail"], "related_eval_log_id": "y"}]);
        assert!(diff_processing_tests(Some(&a), Some(&b)).is_empty());
    }

    #[test]
    fn composite_tracked_values_always_differ() {
        let a = json!([{"test_id": "1", "objective": {"kind": "probe"}}]);
        let b = json!([{"test_id": "1", "objective": {"kind": "probe"}}]);
        let diffs = diff_processing_tests(Some(&a), Some(&b));
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].differences.contains_key("objective"));
    }

    #[test]
    fn positional_alignment_flags_reordered_sequences() {
        let a = json!([{"test_id": "1"}, {"test_id": "2"}]);
        let b = json!([{"test_id": "2"}, {"test_id": "1"}]);
        let diffs = diff_processing_tests(Some(&a), Some(&b));
        assert_eq!(diffs.len(), 2);
    }

    #[test]
    fn non_object_record_reads_as_empty() {
        let a = json!(["scalar"]);
        let b = json!([{"test_id": "1"}]);
        let diffs = diff_processing_tests(Some(&a), Some(&b));
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].test_id, Some(json!("1")));
    }
}
