// SPDX-License-Identifier: MIT OR Apache-2.0
//! Evaluation-export document model
//!
//! A [`Document`] wraps one parsed evaluation export (a JSON object
//! holding tutoring-session tests, logs, and stage definitions) together
//! with the name it was uploaded under. Parsing and required-field
//! validation live here, upstream of the comparison engine: the engine
//! itself accepts any JSON value and never validates.
//!
//! Validation is advisory. A document that fails [`Document::validate`]
//! can still be compared; missing members simply degrade to empty
//! sequences in the comparison results.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use std::str::FromStr;

use crate::error::{EvcmpError, Result};

/// Top-level members every well-formed evaluation export carries.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "student_gpsms",
    "gpsms",
    "tests",
    "processing_tests",
    "test_states",
    "metadata",
];

/// One parsed evaluation export plus the name it was loaded under.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    file_name: Option<String>,
    value: Value,
}

impl Document {
    /// Wrap an already-parsed JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self {
            file_name: None,
            value,
        }
    }

    /// Load a document from a file, recording the file name.
    ///
    /// # Errors
    ///
    /// Returns [`EvcmpError::Io`] if the file cannot be read and
    /// [`EvcmpError::Parse`] if its contents are not valid JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let doc: Self = text.parse()?;
        Ok(doc.with_file_name(
            path.file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
        ))
    }

    /// Attach the name the document was uploaded under.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// The name the document was loaded under, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// The underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.value
    }

    /// Look up a top-level member. Absent members read as `None`, never
    /// as an error.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// The `processing_tests` member, if present.
    #[must_use]
    pub fn processing_tests(&self) -> Option<&Value> {
        self.get("processing_tests")
    }

    /// Check that every member of [`REQUIRED_FIELDS`] is present.
    ///
    /// # Errors
    ///
    /// Returns [`EvcmpError::MissingFields`] naming every absent member
    /// in one message.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| self.value.get(field).is_none())
            .map(String::from)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EvcmpError::MissingFields(missing))
        }
    }

    /// Aggregate counts over the export, for dashboard-style overviews.
    #[must_use]
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            file_name: self.file_name.clone(),
            tests: member_len(self.get("tests")),
            processing_tests: member_len(self.get("processing_tests")),
            gpsms: member_len(self.get("gpsms")),
            student_gpsms: member_len(self.get("student_gpsms")),
            test_states: member_len(self.get("test_states")),
        }
    }
}

impl FromStr for Document {
    type Err = EvcmpError;

    fn from_str(text: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(text)?))
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// Aggregate counts of the export's principal collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    /// Name the document was loaded under, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Number of entries under `tests`.
    pub tests: usize,
    /// Number of entries under `processing_tests`.
    pub processing_tests: usize,
    /// Number of entries under `gpsms`.
    pub gpsms: usize,
    /// Number of entries under `student_gpsms`.
    pub student_gpsms: usize,
    /// Number of entries under `test_states`.
    pub test_states: usize,
}

/// Entry count of a member: array length, object key count, 0 otherwise.
fn member_len(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(map)) => map.len(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete_export() -> Document {
        Document::new(json!({
            "student_gpsms": {"s1": {}},
            "gpsms": {"g1": {}, "g2": {}},
            "tests": [{"id": 1}, {"id": 2}, {"id": 3}],
            "processing_tests": [{"test_id": "1"}],
            "test_states": {"passed": 2, "failed": 1},
            "metadata": {"version": "1.0"}
        }))
    }

    #[test]
    fn validate_accepts_complete_export() {
        assert!(complete_export().validate().is_ok());
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let doc = Document::new(json!({"tests": [], "metadata": {}}));
        let err = doc.validate().unwrap_err();
        match err {
            EvcmpError::MissingFields(missing) => {
                assert_eq!(
                    missing,
                    vec!["student_gpsms", "gpsms", "processing_tests", "test_states"]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = "{not json".parse::<Document>().unwrap_err();
        assert!(matches!(err, EvcmpError::Parse(_)));
    }

    #[test]
    fn absent_member_reads_as_none() {
        let doc = Document::new(json!({"tests": []}));
        assert!(doc.processing_tests().is_none());
        assert!(doc.get("metadata").is_none());
    }

    #[test]
    fn summary_counts_collections() {
        let summary = complete_export().with_file_name("run-a.json").summary();
        assert_eq!(summary.file_name.as_deref(), Some("run-a.json"));
        assert_eq!(summary.tests, 3);
        assert_eq!(summary.processing_tests, 1);
        assert_eq!(summary.gpsms, 2);
        assert_eq!(summary.student_gpsms, 1);
        assert_eq!(summary.test_states, 3);
    }

    #[test]
    fn summary_of_scalar_members_is_zero() {
        let doc = Document::new(json!({"tests": "not-a-list"}));
        assert_eq!(doc.summary().tests, 0);
    }
}
