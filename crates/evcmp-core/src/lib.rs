// SPDX-License-Identifier: MIT OR Apache-2.0
//! Core types, error handling, and the document model for evcmp
//!
//! This crate provides the foundational types used across the evcmp
//! workspace:
//!
//! - [`error`] - Error types and Result alias
//! - [`document`] - The evaluation-export document model and validation

#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]

/// Error types for evcmp operations
pub mod error;
/// Evaluation-export document model
pub mod document;

// Re-exports for convenience
pub use document::{Document, DocumentSummary, REQUIRED_FIELDS};
pub use error::{EvcmpError, Result};
