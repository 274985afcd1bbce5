//! Remote versions table client for Nudge.
//!
//! Performs the single update-check query against a PostgREST-style
//! endpoint and decodes the newest row into [`nudge_core::UpdateInfo`].

mod error;
mod fetch;

pub use error::RemoteError;
pub use fetch::{RemoteConfig, fetch_latest};
