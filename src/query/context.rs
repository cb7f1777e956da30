// src/query/context.rs
//! Per-session conversational context.
//!
//! [`resolve`] rewrites an elliptical utterance ("how old is he?", "fantasy
//! points?") into one naming the last subject. [`QueryContext::observe`]
//! updates that subject afterwards, looking only at what the user actually
//! typed, so a rewritten query can never promote itself into the context.

use crate::config::consts::{COMMON_TEAM_NAMES, FOLLOW_UP_KEYWORDS, PRONOUNS, RESERVED_SUBJECTS};
use crate::config::options::ResolveOptions;
use crate::core::sanitize::{clean_text, contains_phrase};
use crate::store::{PlayerDirectory, TeamDirectory};

use super::normalize::{NormalizedQuery, normalize};
use super::resolve::{PlayerMatch, resolve_player};

/// Directory snapshots a subject has to be found in. Without them only team
/// nicknames count as subjects.
#[derive(Clone, Copy, Debug, Default)]
pub struct Known<'a> {
    pub teams: Option<&'a TeamDirectory>,
    pub players: Option<&'a PlayerDirectory>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryContext {
    last_entity: Option<String>,
}

impl QueryContext {
    pub fn last_entity(&self) -> Option<&str> {
        self.last_entity.as_deref()
    }

    /// Set the subject directly (e.g. after the user picks a player).
    /// Empty or reserved values are ignored. Returns whether it changed.
    pub fn remember(&mut self, entity: &str) -> bool {
        let entity = entity.trim();
        if entity.is_empty() || is_reserved(entity) {
            return false;
        }
        self.last_entity = Some(s!(entity));
        true
    }

    pub fn clear(&mut self) {
        self.last_entity = None;
    }

    /// Update from the raw user input. Residual name words that resolve to
    /// a player become the subject, else a team mention that resolves
    /// becomes the team's display name. Anything else leaves it alone.
    pub fn observe(&mut self, raw: &str, known: Known<'_>, opts: &ResolveOptions) -> bool {
        let nq = normalize(raw, known.teams);
        let entity = match player_subject(&nq, known, opts) {
            Some(name) => name,
            None => match team_subject(&nq, known.teams) {
                Some(name) => name,
                None => return false,
            },
        };

        let changed = self.remember(&entity);
        if changed {
            logd!("context subject → '{entity}'");
        }
        changed
    }
}

fn player_subject(nq: &NormalizedQuery, known: Known<'_>, opts: &ResolveOptions) -> Option<String> {
    let players = known.players?;
    let tokens = nq.subject_tokens();
    if tokens.is_empty() {
        return None;
    }
    let subject = tokens.join(" ");
    if !players.ids_named(&subject).is_empty() {
        return Some(subject);
    }
    let named = NormalizedQuery { name_tokens: tokens, ..nq.clone() };
    match resolve_player(players, known.teams, &named, opts) {
        PlayerMatch::NoMatch => None,
        _ => Some(subject),
    }
}

fn team_subject(nq: &NormalizedQuery, teams: Option<&TeamDirectory>) -> Option<String> {
    let hint = nq.team_hint.as_deref()?;
    teams?.resolve(hint).map(|t| t.display_name.clone())
}

fn is_reserved(entity: &str) -> bool {
    let e = clean_text(entity);
    RESERVED_SUBJECTS.iter().any(|r| *r == e)
}

/// Rewrite `raw` against the last subject with no directories at hand.
pub fn resolve(raw: &str, last_entity: Option<&str>) -> String {
    resolve_with(raw, last_entity, Known::default())
}

/// Rewrite `raw` against the last subject. Pronouns win over follow-up
/// keywords; anything else is returned unchanged.
pub fn resolve_with(raw: &str, last_entity: Option<&str>, known: Known<'_>) -> String {
    let Some(last) = last_entity.map(str::trim).filter(|e| !e.is_empty()) else {
        return s!(raw);
    };
    let cleaned = clean_text(raw);
    let is_pronoun = |w: &str| PRONOUNS.contains(&w);

    if cleaned.split(' ').any(is_pronoun) {
        let rest: Vec<&str> = raw
            .split_whitespace()
            .filter(|w| !is_pronoun(clean_text(w).as_str()))
            .collect();
        return join!(last, " ", &rest.join(" ")).trim_end().to_string();
    }

    let follow_up = FOLLOW_UP_KEYWORDS.iter().any(|k| contains_phrase(&cleaned, k));
    if follow_up && !mentions_subject(raw, &cleaned, known) {
        return format!("{last} {}", raw.trim());
    }

    s!(raw)
}

/// A team nickname or directory key, or a word found in a player's name.
fn mentions_subject(raw: &str, cleaned: &str, known: Known<'_>) -> bool {
    if cleaned.split(' ').any(|w| COMMON_TEAM_NAMES.contains(&w)) {
        return true;
    }
    let nq = normalize(raw, known.teams);
    if team_subject(&nq, known.teams).is_some() {
        return true;
    }
    known
        .players
        .is_some_and(|p| nq.subject_tokens().iter().any(|w| p.has_name_word(w)))
}
