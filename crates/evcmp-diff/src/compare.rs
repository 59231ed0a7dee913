// SPDX-License-Identifier: MIT OR Apache-2.0
//! Comparison orchestration
//!
//! Assembles the user-facing results from the engine primitives: the
//! overview (shallow diff plus serialized-size delta) and the deep
//! analysis (similarity metrics plus the processing-test diff). Both
//! are synchronous, deterministic, and idempotent; neither can fail.

use serde::Serialize;
use serde_json::Value;

use evcmp_core::Document;

use crate::processing::{ProcessingTestDiff, diff_processing_tests};
use crate::shallow::{ShallowDiff, shallow_diff};
use crate::similarity::{content_similarity, structure_similarity};

/// Serialized-size comparison of a document pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSizeInfo {
    /// Compact-serialized byte length of the first document.
    pub size_a: usize,
    /// Compact-serialized byte length of the second document.
    pub size_b: usize,
    /// Absolute size difference in bytes.
    pub difference: usize,
    /// Difference over the larger size, as a percentage rounded to two
    /// decimals. 0 when both sizes are 0.
    pub percentage_difference: f64,
}

impl FileSizeInfo {
    /// Build the metric from two already-measured byte lengths.
    #[must_use]
    pub fn from_lengths(size_a: usize, size_b: usize) -> Self {
        let difference = size_a.abs_diff(size_b);
        let larger = size_a.max(size_b);
        let percentage_difference = if larger == 0 {
            0.0
        } else {
            round2(difference as f64 / larger as f64 * 100.0)
        };
        Self {
            size_a,
            size_b,
            difference,
            percentage_difference,
        }
    }
}

/// Overview comparison: shallow diff plus size delta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Top-level key diff and matching-key ratio.
    #[serde(flatten)]
    pub shallow: ShallowDiff,
    /// Serialized-size comparison.
    pub file_size: FileSizeInfo,
}

/// Deep analysis: similarity metrics plus the processing-test diff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeepAnalysis {
    /// Shared top-level keys over the key union, in `[0, 100]`.
    pub structure_similarity: f64,
    /// First document's keys with deep-equal values, in `[0, 100]`.
    pub content_similarity: f64,
    /// Index-aligned differences over `processing_tests` records.
    pub processing_tests_diff: Vec<ProcessingTestDiff>,
}

/// Both comparison views over a named document pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Name the first document was loaded under, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_a: Option<String>,
    /// Name the second document was loaded under, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_b: Option<String>,
    /// Overview comparison.
    pub overview: Overview,
    /// Deep analysis.
    pub deep: DeepAnalysis,
}

/// Overview comparison of two parsed documents: shallow key diff,
/// matching-key ratio, and serialized-size delta.
#[must_use]
pub fn compare_overview(a: &Value, b: &Value) -> Overview {
    Overview {
        shallow: shallow_diff(a, b),
        file_size: FileSizeInfo::from_lengths(serialized_len(a), serialized_len(b)),
    }
}

/// Deep analysis of two parsed documents: structure and content
/// similarity over the full documents, and the positional diff over
/// their `processing_tests` members (absent members read as empty).
#[must_use]
pub fn compare_deep(a: &Value, b: &Value) -> DeepAnalysis {
    DeepAnalysis {
        structure_similarity: structure_similarity(a, b),
        content_similarity: content_similarity(a, b),
        processing_tests_diff: diff_processing_tests(
            a.get("processing_tests"),
            b.get("processing_tests"),
        ),
    }
}

/// Run both views over a pair of loaded documents, carrying their file
/// names into the report.
#[must_use]
pub fn compare_documents(a: &Document, b: &Document) -> ComparisonReport {
    ComparisonReport {
        file_a: a.file_name().map(str::to_string),
        file_b: b.file_name().map(str::to_string),
        overview: compare_overview(a.as_value(), b.as_value()),
        deep: compare_deep(a.as_value(), b.as_value()),
    }
}

/// Byte length of the compact JSON serialization.
fn serialized_len(value: &Value) -> usize {
    serde_json::to_string(value).map_or(0, |text| text.len())
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
