// src/specs/schedule.rs
//! Reader for a single team's schedule feed, plus next/last game selection.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::core::Fetch;
use crate::core::json::arr;
use crate::error::FetchResult;

use super::scoreboard::{Game, parse_event};

pub fn fetch(fetcher: &dyn Fetch, url: &str) -> FetchResult<Vec<Game>> {
    let payload = fetcher.get_json(url)?;
    Ok(parse(&payload))
}

pub fn parse(payload: &Value) -> Vec<Game> {
    arr(payload, "events").iter().filter_map(parse_event).collect()
}

/// Earliest game strictly after `now`.
pub fn next_game(games: &[Game], now: DateTime<Utc>) -> Option<&Game> {
    games
        .iter()
        .filter(|g| g.date.is_some_and(|d| d > now))
        .min_by_key(|g| g.date)
}

/// Latest game strictly before `now`.
pub fn last_game(games: &[Game], now: DateTime<Utc>) -> Option<&Game> {
    games
        .iter()
        .filter(|g| g.date.is_some_and(|d| d < now))
        .max_by_key(|g| g.date)
}
