//! Core update-check logic for Nudge.
//!
//! This crate is pure and I/O-free:
//! - Dotted-decimal version parsing and comparison.
//! - The update decision derived from the latest published release.
//!
//! Transport (fetching the versions table) and presentation (showing the
//! prompt, opening the store page) live in the other workspace crates.

mod decision;
mod version;

/// Update decision derivation and its input/output types.
pub use decision::{UpdateDecision, UpdateInfo, decide};
/// Dotted-decimal version model and comparison helpers.
pub use version::{Version, VersionParseError, compare};
