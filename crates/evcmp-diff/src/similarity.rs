// SPDX-License-Identifier: MIT OR Apache-2.0
//! Structure and content similarity metrics
//!
//! Two percentage metrics over the top-level keys of a document pair.
//! Structure ignores values entirely; content applies [`deep_equal`]
//! per key. Every zero denominator is defined as 0, never `NaN`.

use serde_json::Value;
use std::collections::BTreeSet;

use crate::equal::deep_equal;
use crate::keys::{key_union, top_keys};

/// Fraction of top-level keys present in both documents, over the key
/// union, as a percentage in `[0, 100]`. Values are not inspected:
/// `{"x": 1}` and `{"x": 2}` are 100% structurally similar. An empty
/// union scores 0.
#[must_use]
pub fn structure_similarity(a: &Value, b: &Value) -> f64 {
    let keys_b: BTreeSet<&str> = top_keys(b).collect();
    let shared = top_keys(a).filter(|key| keys_b.contains(key)).count();
    percentage(shared, key_union(a, b).len())
}

/// Fraction of the first document's top-level keys whose values are
/// [`deep_equal`] in the second, as a percentage in `[0, 100]`.
///
/// The denominator is the first document's key set only, so the metric
/// is asymmetric: `content_similarity(a, b)` and
/// `content_similarity(b, a)` differ whenever the documents carry
/// different key sets. This mirrors the upstream behavior and is kept
/// deliberately. A key absent from the second document never matches;
/// a keyless first document scores 0.
#[must_use]
pub fn content_similarity(a: &Value, b: &Value) -> f64 {
    let Some(map) = a.as_object() else {
        return 0.0;
    };
    let matching = map
        .iter()
        .filter(|(key, va)| b.get(key.as_str()).is_some_and(|vb| deep_equal(va, vb)))
        .count();
    percentage(matching, map.len())
}

/// `part / whole * 100`, with an empty denominator defined as 0.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
