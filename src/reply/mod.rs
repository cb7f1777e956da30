// src/reply/mod.rs
//! Text formatters. Every function here takes already-fetched records and
//! returns the markdown-ish text shown to the user.

pub mod news;
pub mod players;
pub mod schedule;
pub mod scores;
pub mod standings;

use crate::error::FetchError;

/// "⚠️ Error fetching scores: ..."
pub fn fetch_error(what: &str, err: &FetchError) -> String {
    format!("⚠️ Error fetching {what}: {err}")
}
