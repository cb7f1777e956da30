// src/specs/scoreboard.rs
//! Reader for ESPN scoreboard events. The same event shape shows up in team
//! schedules, so [`parse_event`] is shared with `specs::schedule`.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::options::Endpoints;
use crate::core::Fetch;
use crate::core::json::{arr, at, first_str, str_of};
use crate::core::time::parse_iso;
use crate::error::FetchResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Scheduled,
    InProgress,
    Final,
}

impl GameState {
    fn from_feed(state: &str) -> Self {
        match state {
            "in" => GameState::InProgress,
            "post" => GameState::Final,
            _ => GameState::Scheduled,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Side {
    pub name: String,
    pub abbreviation: String,
    /// As sent; empty before kickoff.
    pub score: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub away: Side,
    pub home: Side,
    pub date: Option<DateTime<Utc>>,
    pub state: GameState,
    pub detail: String,
}

impl Game {
    pub fn involves(&self, team_name: &str) -> bool {
        let q = team_name.trim().to_lowercase();
        !q.is_empty()
            && (self.away.name.to_lowercase().contains(&q) || self.home.name.to_lowercase().contains(&q))
    }
}

pub fn fetch(fetcher: &dyn Fetch, endpoints: &Endpoints) -> FetchResult<Vec<Game>> {
    let payload = fetcher.get_json(&endpoints.scoreboard)?;
    Ok(parse(&payload))
}

pub fn parse(payload: &Value) -> Vec<Game> {
    arr(payload, "events").iter().filter_map(parse_event).collect()
}

/// One event. Competition data lives under `competitions[0]` (or on the event
/// itself in older payloads). Events with fewer than two competitors are dropped.
pub fn parse_event(ev: &Value) -> Option<Game> {
    let comp = at(ev, &["competitions", "0"]).unwrap_or(ev);
    let competitors = arr(comp, "competitors");
    if competitors.len() < 2 {
        return None;
    }

    let pick = |side: &str, fallback: usize| {
        competitors
            .iter()
            .find(|c| str_of(c, "homeAway") == side)
            .unwrap_or(&competitors[fallback])
    };
    let home = side_of(pick("home", 0));
    let away = side_of(pick("away", 1));

    let status = at(comp, &["status", "type"])
        .or_else(|| at(ev, &["status", "type"]))
        .unwrap_or(&Value::Null);

    Some(Game {
        away,
        home,
        date: parse_iso(str_of(ev, "date")).or_else(|| parse_iso(str_of(comp, "date"))),
        state: GameState::from_feed(str_of(status, "state")),
        detail: s!(first_str(status, &["shortDetail", "detail", "description"])),
    })
}

fn side_of(c: &Value) -> Side {
    let team = c.get("team").unwrap_or(&Value::Null);
    Side {
        name: s!(first_str(team, &["displayName", "name"])),
        abbreviation: s!(str_of(team, "abbreviation")),
        score: score_of(c.get("score")),
    }
}

/// Scoreboard scores are strings; schedule scores are `{ value, displayValue }`.
fn score_of(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.as_f64().map(|f| format!("{f}")).unwrap_or_default(),
        Some(obj @ Value::Object(_)) => match str_of(obj, "displayValue") {
            "" => score_of(obj.get("value")),
            shown => s!(shown),
        },
        _ => s!(),
    }
}
