// src/specs/teams.rs
//! Reader for the ESPN team list.
//!
//! Purpose:
//! - Turn the `sports[0].leagues[0].teams[*].team` payload into [`TeamRecord`]s.
//! - Accept the flatter `teams[*]` shape some mirrors serve.
//!
//! Non-responsibilities:
//! - No caching (see `store`), no alias matching (see `TeamDirectory`).

use serde_json::Value;

use crate::config::options::Endpoints;
use crate::core::Fetch;
use crate::core::json::{arr, arr_at, first_str, id_of, str_of};
use crate::error::FetchResult;
use crate::store::TeamRecord;

pub fn fetch(fetcher: &dyn Fetch, endpoints: &Endpoints) -> FetchResult<Vec<TeamRecord>> {
    let payload = fetcher.get_json(&endpoints.teams)?;
    let teams = parse(&payload, endpoints);
    logd!("team feed: {} teams", teams.len());
    Ok(teams)
}

pub fn parse(payload: &Value, endpoints: &Endpoints) -> Vec<TeamRecord> {
    let mut items = arr_at(payload, &["sports", "0", "leagues", "0", "teams"]);
    if items.is_empty() {
        items = arr(payload, "teams");
    }

    items
        .iter()
        .filter_map(|item| {
            let team = item.get("team").unwrap_or(item);
            if !team.is_object() {
                return None;
            }
            let id = id_of(team, "id")?;
            Some(TeamRecord {
                display_name: s!(first_str(team, &["displayName", "name"])),
                abbreviation: s!(str_of(team, "abbreviation")),
                slug: s!(str_of(team, "slug")),
                schedule_url: endpoints.schedule_for(&id),
                id,
            })
        })
        .collect()
}
