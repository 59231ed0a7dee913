// SPDX-License-Identifier: MIT OR Apache-2.0
//! Top-level key reconciliation
//!
//! Both the shallow differ and the structure metric work over the union
//! of two documents' top-level keys. Non-object values contribute an
//! empty key set, so scalar or array inputs degrade instead of failing.

use serde_json::Value;
use std::collections::BTreeSet;

/// Top-level keys of a value; empty for anything but an object.
pub fn top_keys(value: &Value) -> impl Iterator<Item = &str> {
    value
        .as_object()
        .into_iter()
        .flat_map(|map| map.keys().map(String::as_str))
}

/// Union of the top-level keys of two values.
#[must_use]
pub fn key_union<'a>(a: &'a Value, b: &'a Value) -> BTreeSet<&'a str> {
    top_keys(a).chain(top_keys(b)).collect()
}
