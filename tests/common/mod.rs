// tests/common/mod.rs
//
// In-memory feeds for driving the bot without a network.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use nfl_chat::ChatBot;
use nfl_chat::config::options::{AppOptions, Endpoints};
use nfl_chat::core::Fetch;
use nfl_chat::error::{FetchError, FetchResult};

pub const TEAMS: &str = "fake://teams";
pub const PLAYERS: &str = "fake://players";
pub const SCOREBOARD: &str = "fake://scoreboard";
pub const STANDINGS: &str = "fake://standings";
pub const NEWS: &str = "fake://news";
pub const STATS_2024: &str = "fake://stats/2024";
pub const YAHOO: &str = "fake://yahoo";

#[derive(Default)]
pub struct FakeFetcher {
    routes: Mutex<HashMap<String, Result<String, u16>>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FakeFetcher {
    pub fn route(&self, url: &str, body: impl Into<String>) {
        self.routes.lock().unwrap().insert(url.to_string(), Ok(body.into()));
    }

    pub fn route_json(&self, url: &str, body: &Value) {
        self.route(url, body.to_string());
    }

    pub fn fail(&self, url: &str, status: u16) {
        self.routes.lock().unwrap().insert(url.to_string(), Err(status));
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }
}

impl Fetch for FakeFetcher {
    fn get_text(&self, url: &str) -> FetchResult<String> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;
        match self.routes.lock().unwrap().get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(FetchError::Status { url: url.to_string(), status: *status }),
            None => Err(FetchError::Status { url: url.to_string(), status: 404 }),
        }
    }
}

pub fn options() -> AppOptions {
    let mut opts = AppOptions::default();
    opts.season = Some(2024);
    opts.endpoints = Endpoints {
        scoreboard: SCOREBOARD.into(),
        news: NEWS.into(),
        teams: TEAMS.into(),
        schedule: "fake://teams/{id}/schedule".into(),
        standings: STANDINGS.into(),
        players: PLAYERS.into(),
        season_stats: "fake://stats/{year}".into(),
        google_news: "fake://google?q={query}".into(),
        yahoo_news: YAHOO.into(),
        pft_news: "fake://pft".into(),
    };
    opts
}

fn team(id: &str, name: &str, abbr: &str) -> Value {
    json!({ "team": { "id": id, "displayName": name, "abbreviation": abbr,
                      "slug": name.to_lowercase().replace(' ', "-") } })
}

fn player(name: &str, pos: &str, team: &str) -> Value {
    let (first, last) = name.split_once(' ').unwrap();
    json!({ "full_name": name, "first_name": first, "last_name": last, "position": pos,
            "team": team, "age": 28, "college": "Somewhere", "years_exp": 6 })
}

fn standing(name: &str, abbr: &str, w: u32, l: u32) -> Value {
    let pct = f64::from(w) / f64::from(w + l);
    json!({ "team": { "displayName": name, "abbreviation": abbr },
            "stats": [
                { "name": "wins", "value": w }, { "name": "losses", "value": l },
                { "name": "ties", "value": 0 },
                { "name": "winPercent", "value": pct },
                { "name": "strengthOfSchedule", "value": 0.5 }
            ] })
}

fn event(date: &str, away: (&str, &str), home: (&str, &str), state: &str) -> Value {
    json!({ "date": date, "competitions": [{
        "competitors": [
            { "homeAway": "home", "score": home.1, "team": { "displayName": home.0 } },
            { "homeAway": "away", "score": away.1, "team": { "displayName": away.0 } }
        ],
        "status": { "type": { "state": state, "shortDetail": state } }
    }]})
}

/// A small league: five teams, three players called Josh Allen, one season.
pub fn seeded() -> Arc<FakeFetcher> {
    let fake = Arc::new(FakeFetcher::default());

    fake.route_json(TEAMS, &json!({ "sports": [{ "leagues": [{ "teams": [
        team("2", "Buffalo Bills", "BUF"),
        team("12", "Kansas City Chiefs", "KC"),
        team("17", "New England Patriots", "NE"),
        team("19", "New York Giants", "NYG"),
        team("30", "Jacksonville Jaguars", "JAX"),
    ]}]}]}));

    fake.route_json(PLAYERS, &json!({
        "4984": player("Josh Allen", "QB", "BUF"),
        "1466": player("Josh Allen", "DE", "JAX"),
        "9000": player("Josh Allen", "WR", "NYG"),
        "4046": player("Patrick Mahomes", "QB", "KC"),
        "4035": player("Travis Kelce", "TE", "KC"),
    }));

    fake.route_json(STATS_2024, &json!({
        "4984": { "pts_ppr": 30.1 },
        "9000": { "pts_ppr": 12.4 },
        "1466": { "pts_ppr": 99.0 },
        "4046": { "fantasy_points": "25.5" },
    }));

    fake.route_json(STANDINGS, &json!({ "children": [
        { "abbreviation": "AFC", "children": [
            { "name": "AFC East", "standings": { "entries": [
                standing("Buffalo Bills", "BUF", 9, 8),
                standing("New England Patriots", "NE", 4, 13),
            ]}},
            { "name": "AFC West", "standings": { "entries": [
                standing("Kansas City Chiefs", "KC", 15, 2),
            ]}}
        ]},
        { "abbreviation": "NFC", "children": [
            { "name": "NFC East", "standings": { "entries": [
                standing("New York Giants", "NYG", 3, 14),
            ]}}
        ]}
    ]}));

    fake.route_json(SCOREBOARD, &json!({ "events": [
        event("2024-09-08T17:00Z", ("Arizona Cardinals", "28"), ("Buffalo Bills", "34"), "post"),
        event("2024-09-08T20:25Z", ("Baltimore Ravens", "20"), ("Kansas City Chiefs", "27"), "post"),
    ]}));

    fake.route_json("fake://teams/2/schedule", &json!({ "events": [
        event("2000-09-10T17:00Z", ("Buffalo Bills", "13"), ("Miami Dolphins", "7"), "post"),
        event("2099-09-13T17:00Z", ("New York Jets", ""), ("Buffalo Bills", ""), "pre"),
    ]}));

    fake.route_json(NEWS, &json!({ "articles": [
        { "headline": "Chiefs roll on", "links": { "web": { "href": "https://espn/1" } } },
        { "headline": "Josh Allen leads Bills comeback", "links": { "web": { "href": "https://espn/2" } } },
    ]}));

    fake.route(YAHOO, r#"<rss><channel>
        <item><title>Patriots name new coach</title><link>https://yahoo/1</link></item>
    </channel></rss>"#);

    fake
}

pub fn bot(fake: &Arc<FakeFetcher>) -> ChatBot {
    ChatBot::with_fetcher(fake.clone(), options())
}
