// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for evcmp operations
//!
//! All fallible operations in the workspace return [`Result`]. The
//! comparison engine itself never fails; errors arise only while loading
//! or validating documents before a comparison begins.

use thiserror::Error;

/// Errors produced while loading or validating evaluation exports.
#[derive(Debug, Error)]
pub enum EvcmpError {
    /// The input text is not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// One or more required top-level members are absent from the export.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// File read failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the evcmp workspace.
pub type Result<T> = std::result::Result<T, EvcmpError>;
