// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shallow key-level diff
//!
//! Walks the top-level key union of two documents and records every key
//! whose values are not [`same_value`]-equal, together with the fraction
//! of keys that matched. Nested structures are not descended into: two
//! separately parsed documents report every composite-valued key as a
//! difference, which is the intended shallow rule.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::equal::same_value;
use crate::keys::key_union;
use crate::similarity::percentage;

/// The value a differing key holds on each side. An absent side is
/// omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiffEntry {
    /// Value in the first document, if the key is present there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<Value>,
    /// Value in the second document, if the key is present there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<Value>,
}

/// Per-key differences plus the matching-key ratio.
///
/// Entry order is an implementation detail (the map is keyed, not
/// positional); callers must not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShallowDiff {
    /// Keys whose values differ, with the value on each side.
    pub entries: BTreeMap<String, DiffEntry>,
    /// Matching keys over the key union, as a percentage in `[0, 100]`.
    /// Defined as 0 for an empty union.
    pub similarity: f64,
}

/// Diff the top-level keys of two documents.
///
/// A key matches when both sides hold it and the values are
/// [`same_value`]-equal. Passing the same document for both sides makes
/// every key match by reference identity. Non-object inputs have no
/// keys, so the result degrades to an empty diff with similarity 0.
#[must_use]
pub fn shallow_diff(a: &Value, b: &Value) -> ShallowDiff {
    let union = key_union(a, b);
    let mut entries = BTreeMap::new();
    let mut matching = 0usize;
    for key in &union {
        let va = a.get(key);
        let vb = b.get(key);
        if matches_shallow(va, vb) {
            matching += 1;
        } else {
            entries.insert(
                (*key).to_string(),
                DiffEntry {
                    a: va.cloned(),
                    b: vb.cloned(),
                },
            );
        }
    }
    let similarity = percentage(matching, union.len());
    ShallowDiff {
        entries,
        similarity,
    }
}

fn matches_shallow(va: Option<&Value>, vb: Option<&Value>) -> bool {
    match (va, vb) {
        (Some(x), Some(y)) => same_value(x, y),
        (None, None) => true,
        _ => false,
    }
}
