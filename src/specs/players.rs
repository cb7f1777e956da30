// src/specs/players.rs
//! Reader for the Sleeper player map (`{ "<id>": { full_name, position, team, ... } }`).

use serde_json::Value;

use crate::config::options::Endpoints;
use crate::core::Fetch;
use crate::core::json::{id_of, str_of, u32_of};
use crate::error::FetchResult;
use crate::store::{PlayerRecord, Position};

pub fn fetch(fetcher: &dyn Fetch, endpoints: &Endpoints) -> FetchResult<Vec<PlayerRecord>> {
    let payload = fetcher.get_json(&endpoints.players)?;
    let players = parse(&payload);
    logd!("player feed: {} players", players.len());
    Ok(players)
}

/// Entries without an id or a name are skipped.
pub fn parse(payload: &Value) -> Vec<PlayerRecord> {
    let Some(map) = payload.as_object() else {
        return Vec::new();
    };

    map.iter()
        .filter_map(|(key, rec)| {
            if !rec.is_object() {
                return None;
            }
            let id = id_of(rec, "player_id").unwrap_or_else(|| key.trim().to_string());
            if id.is_empty() {
                return None;
            }

            let first_name = str_of(rec, "first_name").trim().to_string();
            let last_name = str_of(rec, "last_name").trim().to_string();
            let full_name = match str_of(rec, "full_name").trim() {
                "" => join!(&first_name, " ", &last_name).trim().to_string(),
                full => s!(full),
            };
            if full_name.is_empty() {
                return None;
            }

            Some(PlayerRecord {
                id,
                first_name,
                last_name,
                full_name,
                position: Position::from_feed(str_of(rec, "position")),
                team: non_empty(str_of(rec, "team")).map(|t| t.to_ascii_uppercase()),
                age: u32_of(rec, "age"),
                college: non_empty(str_of(rec, "college")),
                years_experience: u32_of(rec, "years_exp").or_else(|| u32_of(rec, "experience")),
            })
        })
        .collect()
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s!(s))
}
