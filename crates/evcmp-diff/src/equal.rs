// SPDX-License-Identifier: MIT OR Apache-2.0
//! Value equality primitives
//!
//! Three equality rules over [`serde_json::Value`], graded by depth:
//!
//! - [`same_value`] - `Object.is` semantics: composites only by
//!   reference identity, floats by bit pattern.
//! - [`strict_eq`] - `===` semantics: like [`same_value`] but floats by
//!   IEEE comparison, so `NaN != NaN` and `+0.0 == -0.0`.
//! - [`deep_equal`] - recursive structural equality over composites,
//!   falling back to [`same_value`] for primitives.
//!
//! The reference-identity rule matters: values drawn from two separately
//! parsed documents never alias, so under [`same_value`] and
//! [`strict_eq`] any pair of composite values counts as different unless
//! the caller literally passed the same value twice.

use serde_json::{Number, Value};
use std::ptr;

/// `Object.is`-style equality.
///
/// Reference identity short-circuits to equal. Primitives compare by
/// value, with floats compared by bit pattern (`NaN` equals itself,
/// `+0.0` differs from `-0.0`). Distinct composite values are never
/// equal, regardless of contents.
#[must_use]
pub fn same_value(x: &Value, y: &Value) -> bool {
    if ptr::eq(x, y) {
        return true;
    }
    match (x, y) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_same_value(a, b),
        _ => false,
    }
}

/// Strict (`===`) equality.
///
/// Identical to [`same_value`] except for float comparison: `NaN` never
/// equals itself and `+0.0` equals `-0.0`. Used for the tracked fields
/// of processing-test records.
#[must_use]
pub fn strict_eq(x: &Value, y: &Value) -> bool {
    if ptr::eq(x, y) {
        return true;
    }
    match (x, y) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_strict_eq(a, b),
        _ => false,
    }
}

/// Recursive structural equality.
///
/// Two composites are equal when their entry counts match and every key
/// of the first resolves to a recursively equal value in the second.
/// Arrays take part as objects with positional keys, so `[1, 2]` equals
/// `{"0": 1, "1": 2}`. Primitives fall back to [`same_value`].
///
/// Terminates on any parsed-JSON input (parsed text cannot contain
/// reference cycles). Reflexive and symmetric.
#[must_use]
pub fn deep_equal(x: &Value, y: &Value) -> bool {
    let (Some(len_x), Some(len_y)) = (composite_len(x), composite_len(y)) else {
        return same_value(x, y);
    };
    if len_x != len_y {
        return false;
    }
    match x {
        Value::Object(map) => map
            .iter()
            .all(|(key, vx)| entry_by_key(y, key).is_some_and(|vy| deep_equal(vx, vy))),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .all(|(index, vx)| entry_by_index(y, index).is_some_and(|vy| deep_equal(vx, vy))),
        _ => false,
    }
}

/// Entry count of a composite value, `None` for primitives.
fn composite_len(value: &Value) -> Option<usize> {
    match value {
        Value::Object(map) => Some(map.len()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Look up a string key in either composite kind; numeric-string keys
/// index into arrays.
fn entry_by_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

/// Look up a positional key in either composite kind.
fn entry_by_index(value: &Value, index: usize) -> Option<&Value> {
    match value {
        Value::Object(map) => map.get(&index.to_string()),
        Value::Array(items) => items.get(index),
        _ => None,
    }
}

/// Numbers under `Object.is`: integers by value, anything involving a
/// float by f64 bit pattern (JSON numbers are all doubles upstream).
fn numbers_same_value(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.to_bits() == y.to_bits(),
        _ => false,
    }
}

/// Numbers under `===`: integers by value, anything involving a float
/// by IEEE comparison.
#[allow(clippy::float_cmp)]
fn numbers_strict_eq(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn same_value_primitives() {
        assert!(same_value(&json!(null), &json!(null)));
        assert!(same_value(&json!(true), &json!(true)));
        assert!(same_value(&json!("abc"), &json!("abc")));
        assert!(same_value(&json!(42), &json!(42)));
        assert!(same_value(&json!(1), &json!(1.0)));
        assert!(!same_value(&json!(42), &json!(43)));
        assert!(!same_value(&json!("a"), &json!(1)));
        assert!(!same_value(&json!(null), &json!(false)));
    }

    #[test]
    fn same_value_distinguishes_signed_zero() {
        assert!(!same_value(&json!(0.0), &json!(-0.0)));
        assert!(strict_eq(&json!(0.0), &json!(-0.0)));
    }

    #[test]
    fn distinct_composites_are_never_same_value() {
        let a = json!({"x": 1});
        let b = json!({"x": 1});
        assert!(!same_value(&a, &b));
        assert!(!strict_eq(&a, &b));
    }

    #[test]
    fn aliased_composites_are_same_value() {
        let a = json!([1, 2, 3]);
        assert!(same_value(&a, &a));
        assert!(strict_eq(&a, &a));
    }

    #[test]
    fn deep_equal_nested_structures() {
        let a = json!({"x": {"y": [1, 2, {"z": null}]}, "w": "s"});
        let b = json!({"w": "s", "x": {"y": [1, 2, {"z": null}]}});
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn deep_equal_detects_nested_difference() {
        let a = json!({"x": {"y": [1, 2, 3]}});
        let b = json!({"x": {"y": [1, 2, 4]}});
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn deep_equal_key_count_mismatch() {
        assert!(!deep_equal(&json!({"x": 1}), &json!({"x": 1, "y": 2})));
        assert!(!deep_equal(&json!([1, 2]), &json!([1, 2, 3])));
    }

    #[test]
    fn array_equals_object_with_positional_keys() {
        assert!(deep_equal(&json!([10, 20]), &json!({"0": 10, "1": 20})));
        assert!(deep_equal(&json!({"0": 10, "1": 20}), &json!([10, 20])));
        assert!(!deep_equal(&json!([10, 20]), &json!({"0": 10, "2": 20})));
    }

    #[test]
    fn deep_equal_empty_composites() {
        assert!(deep_equal(&json!({}), &json!({})));
        assert!(deep_equal(&json!([]), &json!([])));
        assert!(deep_equal(&json!([]), &json!({})));
    }

    fn arb_json() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(json!(null)),
            any::<bool>().prop_map(|b| json!(b)),
            any::<i64>().prop_map(|n| json!(n)),
            (-1.0e9..1.0e9_f64).prop_map(|f| json!(f)),
            "[a-z]{0,8}".prop_map(serde_json::Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,4}", inner, 0..6)
                    .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn deep_equal_is_reflexive(v in arb_json()) {
            prop_assert!(deep_equal(&v, &v));
        }

        #[test]
        fn deep_equal_is_symmetric(x in arb_json(), y in arb_json()) {
            prop_assert_eq!(deep_equal(&x, &y), deep_equal(&y, &x));
        }

        #[test]
        fn deep_equal_holds_for_structural_clones(v in arb_json()) {
            prop_assert!(deep_equal(&v, &v.clone()));
        }
    }
}
