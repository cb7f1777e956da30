// src/query/resolve.rs
//! Player resolution against the directory snapshots.
//!
//! Two passes over the records (id order, one entry per id):
//! - strict: every name token is a substring of the cleaned full name;
//! - fuzzy (only when strict finds nothing): normalized Levenshtein between
//!   the joined tokens and the cleaned full name, at or above the threshold.
//!
//! Both passes apply the position and team filters.

use strsim::normalized_levenshtein;

use crate::config::options::ResolveOptions;
use crate::specs::fantasy::SeasonPoints;
use crate::store::{PlayerDirectory, PlayerRecord, Position, TeamDirectory};

use super::normalize::NormalizedQuery;

#[derive(Clone, Debug, PartialEq)]
pub enum PlayerMatch {
    NoMatch,
    Single(PlayerRecord),
    /// Up to `max_choices` candidates plus how many more were left out.
    Multiple { shown: Vec<PlayerRecord>, remaining: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct FantasyMatch {
    pub player: PlayerRecord,
    pub points: f64,
}

struct Filters<'a> {
    position: Option<&'a Position>,
    team_hint: Option<String>,
    team_abbr: Option<String>,
}

impl<'a> Filters<'a> {
    fn new(query: &'a NormalizedQuery, teams: Option<&TeamDirectory>) -> Self {
        let team_hint = query.team_hint.as_ref().map(|h| h.to_lowercase());
        let team_abbr = team_hint
            .as_deref()
            .and_then(|h| teams.and_then(|t| t.resolve(h)))
            .map(|t| t.abbreviation.to_lowercase())
            .filter(|a| !a.is_empty());
        Self { position: query.position_hint.as_ref(), team_hint, team_abbr }
    }

    fn accepts(&self, rec: &PlayerRecord) -> bool {
        if let Some(pos) = self.position {
            if rec.position.as_ref() != Some(pos) {
                return false;
            }
        }
        match &self.team_hint {
            None => true,
            Some(hint) => {
                let Some(team) = rec.team.as_deref().map(str::to_lowercase) else {
                    return false;
                };
                team.contains(hint.as_str()) || self.team_abbr.as_deref() == Some(team.as_str())
            }
        }
    }
}

fn candidates<'p>(
    players: &'p PlayerDirectory,
    tokens: &[String],
    filters: &Filters<'_>,
    threshold: f64,
    extra: impl Fn(&PlayerRecord) -> bool,
) -> Vec<&'p PlayerRecord> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let eligible = |rec: &PlayerRecord| filters.accepts(rec) && extra(rec);

    let strict: Vec<&PlayerRecord> = players
        .iter_searchable()
        .filter(|(rec, name)| tokens.iter().all(|t| name.contains(t.as_str())) && eligible(*rec))
        .map(|(rec, _)| rec)
        .collect();
    if !strict.is_empty() {
        return strict;
    }

    let wanted = tokens.join(" ");
    let fuzzy: Vec<&PlayerRecord> = players
        .iter_searchable()
        .filter(|(rec, name)| normalized_levenshtein(&wanted, name) >= threshold && eligible(*rec))
        .map(|(rec, _)| rec)
        .collect();
    if !fuzzy.is_empty() {
        logd!("fuzzy match for '{wanted}': {} candidates", fuzzy.len());
    }
    fuzzy
}

pub fn resolve_player(
    players: &PlayerDirectory,
    teams: Option<&TeamDirectory>,
    query: &NormalizedQuery,
    opts: &ResolveOptions,
) -> PlayerMatch {
    let filters = Filters::new(query, teams);
    let found = candidates(players, &query.name_tokens, &filters, opts.fuzzy_threshold, |_| true);

    match found.len() {
        0 => PlayerMatch::NoMatch,
        1 => PlayerMatch::Single(found[0].clone()),
        n => {
            let cap = opts.max_choices.max(1);
            PlayerMatch::Multiple {
                shown: found.into_iter().take(cap).cloned().collect(),
                remaining: n.saturating_sub(cap),
            }
        }
    }
}

/// Fantasy lookups never ask the user to choose: among QB/RB/WR/TE matches
/// with points on record, the top scorer wins (first in id order on a tie).
pub fn resolve_fantasy(
    players: &PlayerDirectory,
    teams: Option<&TeamDirectory>,
    query: &NormalizedQuery,
    points: &SeasonPoints,
    opts: &ResolveOptions,
) -> Option<FantasyMatch> {
    let filters = Filters::new(query, teams);
    let is_fantasy = |rec: &PlayerRecord| rec.position.as_ref().is_some_and(Position::is_fantasy);

    candidates(players, &query.name_tokens, &filters, opts.fuzzy_threshold, is_fantasy)
        .into_iter()
        .filter_map(|rec| points.get(&rec.id).map(|pts| (rec, pts)))
        .fold(None, |best: Option<(&PlayerRecord, f64)>, (rec, pts)| match best {
            Some((_, top)) if top >= pts => best,
            _ => Some((rec, pts)),
        })
        .map(|(rec, pts)| FantasyMatch { player: rec.clone(), points: pts })
}
