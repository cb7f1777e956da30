// src/query/mod.rs
//! Query understanding: text cleanup, entity resolution, conversational
//! rewrites and intent classification. Nothing in here does I/O; directory
//! snapshots are passed in by the caller.

pub mod context;
pub mod intent;
pub mod normalize;
pub mod resolve;

pub use context::{Known, QueryContext};
pub use intent::{Intent, classify};
pub use normalize::{NormalizedQuery, normalize};
pub use resolve::{FantasyMatch, PlayerMatch, resolve_fantasy, resolve_player};

use crate::config::consts::{ACTION_WORDS, FILLER_PHRASES};

/// Words that carry no subject: action vocabulary and one-word fillers.
pub(crate) fn is_noise_word(word: &str) -> bool {
    ACTION_WORDS.contains(&word) || FILLER_PHRASES.iter().any(|f| *f == word)
}
