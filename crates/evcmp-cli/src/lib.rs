// SPDX-License-Identifier: MIT OR Apache-2.0
//! # evcmp-cli
//!
//! Command-line interface for evcmp - compare evaluation-session JSON
//! exports from the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Shallow overview: key diff, similarity score, size delta
//! evcmp compare run-a.json run-b.json
//!
//! # Deep analysis: structure/content similarity, processing-test diff
//! evcmp deep run-a.json run-b.json
//!
//! # Both views in one report
//! evcmp report run-a.json run-b.json
//!
//! # Check an export for the required top-level members
//! evcmp validate run-a.json
//!
//! # Aggregate counts of one export
//! evcmp summary run-a.json
//! ```
//!
//! ## Subcommands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `compare` | Shallow key-level diff with similarity score and size delta |
//! | `deep` | Structure/content similarity and processing-test diff |
//! | `report` | Overview and deep analysis combined |
//! | `validate` | Check required top-level members of one export |
//! | `summary` | Aggregate counts of one export |
//!
//! ## Library Usage
//!
//! This crate is primarily a CLI tool. For programmatic access, use the
//! constituent library crates directly:
//!
//! - [`evcmp-diff`](https://docs.rs/evcmp-diff) - the comparison engine
//! - [`evcmp-core`](https://docs.rs/evcmp-core) - document model and errors

#![warn(missing_docs)]

/// Re-export of evcmp-diff for the comparison engine.
pub use evcmp_diff as diff;

/// Re-export of evcmp-core for the document model.
pub use evcmp_core as core;
