// SPDX-License-Identifier: MIT OR Apache-2.0
//! # Evaluation-export comparison engine
//!
//! Compares two parsed evaluation-session JSON exports and reports how
//! alike they are, without ever failing: every degenerate input produces
//! a well-formed (possibly empty) result.
//!
//! The engine offers two views over a document pair:
//!
//! ## Overview
//! A shallow key-level diff of the top-level members plus a
//! serialized-size comparison. Shallow means `Object.is`-style value
//! equality per key: nested structures from two separately parsed
//! documents always count as different, whatever their contents.
//!
//! ## Deep analysis
//! Structural similarity (shared top-level keys over the key union),
//! content similarity (keys of the first document whose values are
//! recursively equal in the second), and a field-level diff over the
//! embedded `processing_tests` records, aligned by position.
//!
//! Both entry points are pure and deterministic; calling twice with the
//! same inputs yields identical output structures.

mod compare;
mod equal;
mod keys;
mod processing;
mod shallow;
mod similarity;

pub use compare::{
    ComparisonReport, DeepAnalysis, FileSizeInfo, Overview, compare_deep, compare_documents,
    compare_overview,
};
pub use equal::{deep_equal, same_value, strict_eq};
pub use keys::{key_union, top_keys};
pub use processing::{ProcessingTestDiff, TRACKED_FIELDS, diff_processing_tests};
pub use shallow::{DiffEntry, ShallowDiff, shallow_diff};
pub use similarity::{content_similarity, structure_similarity};
