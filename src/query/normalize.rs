// src/query/normalize.rs
//! Free text → position hint, team hint and residual name tokens.
//!
//! Steps, in order:
//! 1. lowercase, keep `[a-z0-9 ]`, collapse whitespace;
//! 2. drop filler phrases, longest first, as whole-word sequences;
//! 3. pull out position abbreviations (the last one wins);
//! 4. pull out the first team nickname, then the first directory key;
//! 5. whatever is left is the name.
//!
//! A real name word that doubles as a filler (or a single-letter position
//! such as "c" in "c j") is dropped too.

use crate::config::consts::{COMMON_TEAM_NAMES, FILLER_PHRASES};
use crate::core::sanitize::{clean_text, contains_phrase, remove_phrase};
use crate::store::{Position, TeamDirectory};

use super::is_noise_word;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedQuery {
    pub position_hint: Option<Position>,
    /// The matched team key, as written ("bills", "buf", "new england patriots").
    pub team_hint: Option<String>,
    pub name_tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn has_name(&self) -> bool {
        !self.name_tokens.is_empty()
    }

    /// Name tokens without intent vocabulary ("how many points does josh
    /// allen have" → ["josh", "allen"]).
    pub fn subject_tokens(&self) -> Vec<String> {
        self.name_tokens
            .iter()
            .filter(|t| !is_noise_word(t))
            .cloned()
            .collect()
    }
}

pub fn normalize(raw: &str, teams: Option<&TeamDirectory>) -> NormalizedQuery {
    let mut text = strip_fillers(&clean_text(raw));

    let mut position_hint = None;
    let mut kept: Vec<&str> = Vec::new();
    for word in text.split(' ').filter(|w| !w.is_empty()) {
        match Position::parse_known(word) {
            Some(pos) => position_hint = Some(pos),
            None => kept.push(word),
        }
    }
    text = kept.join(" ");

    let directory_keys = teams.map(TeamDirectory::text_keys).unwrap_or_default();
    let team_hint = COMMON_TEAM_NAMES
        .iter()
        .map(|k| s!(*k))
        .chain(directory_keys)
        .find(|key| contains_phrase(&text, key));
    if let Some(key) = &team_hint {
        text = remove_phrase(&text, key);
    }

    NormalizedQuery {
        position_hint,
        team_hint,
        name_tokens: text.split(' ').filter(|w| !w.is_empty()).map(String::from).collect(),
    }
}

fn strip_fillers(text: &str) -> String {
    let mut phrases: Vec<&str> = FILLER_PHRASES.to_vec();
    phrases.sort_by(|a, b| {
        let words = |p: &str| p.split(' ').count();
        words(b).cmp(&words(a)).then_with(|| b.len().cmp(&a.len()))
    });
    phrases
        .into_iter()
        .fold(s!(text), |acc, phrase| remove_phrase(&acc, phrase))
}
