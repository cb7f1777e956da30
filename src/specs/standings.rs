// src/specs/standings.rs
//! Reader for the ESPN standings tree.
//!
//! The payload nests groups (`children`) to arbitrary depth: league →
//! conference → division in some seasons, league → conference in others. Any
//! node with `standings.entries` becomes a [`StandingsGroup`]. Each team's
//! conference comes from the nearest ancestor group naming AFC/NFC, then the
//! team's own `groups`, then its nickname, and finally defaults to AFC.

use std::fmt;

use serde_json::Value;

use crate::config::consts::{AFC_MASCOTS, NFC_MASCOTS};
use crate::config::options::Endpoints;
use crate::core::Fetch;
use crate::core::json::{arr, arr_at, first_str, num, str_of, truthy};
use crate::error::FetchResult;

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conference {
    AFC,
    NFC,
}

impl Conference {
    pub const ALL: [Conference; 2] = [Conference::AFC, Conference::NFC];

    /// "American Football Conference" / "AFC East" / "NFC" → conference.
    fn from_label(label: &str) -> Option<Conference> {
        let up = label.to_ascii_uppercase();
        if up.contains("AFC") || up.contains("AMERICAN FOOTBALL CONFERENCE") {
            Some(Conference::AFC)
        } else if up.contains("NFC") || up.contains("NATIONAL FOOTBALL CONFERENCE") {
            Some(Conference::NFC)
        } else {
            None
        }
    }

    fn from_mascot(display_name: &str) -> Option<Conference> {
        let dn = display_name.to_lowercase();
        let mascot = dn.split_whitespace().last()?;
        if NFC_MASCOTS.contains(&mascot) {
            Some(Conference::NFC)
        } else if AFC_MASCOTS.contains(&mascot) {
            Some(Conference::AFC)
        } else {
            None
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Conference::AFC => "AFC",
            Conference::NFC => "NFC",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamStanding {
    pub name: String,
    pub abbreviation: String,
    pub conference: Conference,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub pct: f64,
    pub strength_of_schedule: f64,
    pub division_rank: Option<u32>,
    pub clinched_division: bool,
    pub clinched_playoff: bool,
}

impl TeamStanding {
    /// "9-8-0"
    pub fn record(&self) -> String {
        format!("{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StandingsGroup {
    pub name: String,
    pub entries: Vec<TeamStanding>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Standings {
    pub groups: Vec<StandingsGroup>,
}

impl Standings {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.entries.is_empty())
    }

    pub fn teams(&self) -> impl Iterator<Item = &TeamStanding> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    /// Display-name substring or exact abbreviation, first in feed order.
    pub fn find(&self, query: &str) -> Option<&TeamStanding> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }
        self.teams()
            .find(|t| t.name.to_lowercase().contains(&q) || t.abbreviation.to_lowercase() == q)
    }

    /// Conference table sorted by pct, then wins (both descending).
    pub fn conference(&self, conf: Conference) -> Vec<&TeamStanding> {
        let mut teams: Vec<&TeamStanding> = self.teams().filter(|t| t.conference == conf).collect();
        teams.sort_by(|a, b| b.pct.total_cmp(&a.pct).then_with(|| b.wins.cmp(&a.wins)));
        teams
    }
}

pub fn fetch(fetcher: &dyn Fetch, endpoints: &Endpoints) -> FetchResult<Standings> {
    let payload = fetcher.get_json(&endpoints.standings)?;
    Ok(parse(&payload))
}

pub fn parse(payload: &Value) -> Standings {
    let mut groups = Vec::new();
    walk(payload, None, &mut groups);
    Standings { groups }
}

fn walk(node: &Value, inherited: Option<Conference>, out: &mut Vec<StandingsGroup>) {
    let own = Conference::from_label(str_of(node, "abbreviation"))
        .or_else(|| Conference::from_label(str_of(node, "name")));
    let conf = own.or(inherited);

    let entries = arr_at(node, &["standings", "entries"]);
    if !entries.is_empty() {
        out.push(StandingsGroup {
            name: s!(first_str(node, &["name", "abbreviation"])),
            entries: entries.iter().map(|e| read_entry(e, conf)).collect(),
        });
    }

    for child in arr(node, "children") {
        walk(child, conf, out);
    }
}

fn read_entry(entry: &Value, group_conf: Option<Conference>) -> TeamStanding {
    let team = entry.get("team").unwrap_or(&Value::Null);
    let name = s!(first_str(team, &["displayName", "name"]));

    let conference = group_conf
        .or_else(|| team_groups_conference(team))
        .or_else(|| Conference::from_mascot(&name))
        .unwrap_or(Conference::AFC);

    let stats = arr(entry, "stats");
    let count = |key: &str| stat(stats, key).map(|v| v.max(0.0) as u32).unwrap_or(0);

    TeamStanding {
        abbreviation: s!(str_of(team, "abbreviation")),
        conference,
        wins: count("wins"),
        losses: count("losses"),
        ties: count("ties"),
        pct: stat(stats, "winPercent").unwrap_or(0.0),
        strength_of_schedule: stat(stats, "strengthOfSchedule").unwrap_or(0.0),
        division_rank: stat(stats, "divisionRank")
            .filter(|r| *r > 0.0)
            .map(|r| r as u32),
        clinched_division: truthy(stat_value(stats, "clinchedDivision")),
        clinched_playoff: truthy(stat_value(stats, "clinchedPlayoff")),
        name,
    }
}

/// Team `groups` is a list of `{name}` in some payloads and a single object in others.
fn team_groups_conference(team: &Value) -> Option<Conference> {
    match team.get("groups")? {
        Value::Array(groups) => groups.iter().find_map(|g| {
            Conference::from_label(str_of(g, "name")).or_else(|| Conference::from_label(str_of(g, "abbreviation")))
        }),
        obj @ Value::Object(_) => Conference::from_label(str_of(obj, "name"))
            .or_else(|| obj.get("parent").and_then(|p| Conference::from_label(str_of(p, "name")))),
        _ => None,
    }
}

fn stat_value<'a>(stats: &'a [Value], name: &str) -> Option<&'a Value> {
    stats
        .iter()
        .find(|s| str_of(s, "name") == name)
        .and_then(|s| s.get("value"))
}

fn stat(stats: &[Value], name: &str) -> Option<f64> {
    stats
        .iter()
        .find(|s| str_of(s, "name") == name)
        .and_then(|s| s.get("value").and_then(num).or_else(|| s.get("displayValue").and_then(num)))
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn walks_nested_groups() {
        let payload = league(
            vec![entry("Buffalo Bills", "BUF", 9, 8, 0.529)],
            vec![entry("Dallas Cowboys", "DAL", 12, 5, 0.706)],
        );
        let st = parse(&payload);
        assert_eq!(st.groups.len(), 2);
        assert_eq!(st.groups[0].name, "AFC East");

        let bills = st.find("bills").unwrap();
        assert_eq!(bills.record(), "9-8-0");
        assert_eq!(bills.conference, Conference::AFC);
        assert!((bills.strength_of_schedule - 0.512).abs() < 1e-9);
        assert_eq!(st.find("dal").unwrap().conference, Conference::NFC);
    }

    #[test]
    fn league_root_name_is_not_a_conference() {
        let payload = json!({ "name": "National Football League", "children": [
            { "name": "Everyone", "standings": { "entries": [entry("Dallas Cowboys", "DAL", 12, 5, 0.706)] } }
        ]});
        assert_eq!(parse(&payload).find("DAL").unwrap().conference, Conference::NFC);
    }

    #[test]
    fn group_metadata_beats_mascot() {
        // a "Giants" entry listed under an AFC group stays AFC
        let payload = league(vec![entry("Test Giants", "TG", 1, 1, 0.5)], vec![]);
        assert_eq!(parse(&payload).find("giants").unwrap().conference, Conference::AFC);
    }

    #[test]
    fn falls_back_to_team_groups_then_mascot_then_afc() {
        let payload = json!({ "children": [{ "name": "Everyone", "standings": { "entries": [
            { "team": { "displayName": "Seattle Seahawks", "groups": [{ "name": "AFC West" }] } },
            { "team": { "displayName": "Dallas Cowboys" } },
            { "team": { "displayName": "London Monarchs" } }
        ]}}]});
        let st = parse(&payload);
        let confs: Vec<Conference> = st.teams().map(|t| t.conference).collect();
        assert_eq!(confs, [Conference::AFC, Conference::NFC, Conference::AFC]);
    }

    #[test]
    fn string_stats_and_clinch_flags() {
        let e = json!({
            "team": { "displayName": "Kansas City Chiefs" },
            "stats": [
                { "name": "wins", "value": "15" },
                { "name": "winPercent", "displayValue": ".882" },
                { "name": "clinchedDivision", "value": 1 }
            ]
        });
        let t = read_entry(&e, None);
        assert_eq!(t.wins, 15);
        assert!((t.pct - 0.882).abs() < 1e-9);
        assert!(t.clinched_division);
        assert!(!t.clinched_playoff);
    }

    #[test]
    fn conference_table_is_sorted() {
        let payload = league(
            vec![
                entry("Buffalo Bills", "BUF", 9, 8, 0.529),
                entry("Miami Dolphins", "MIA", 11, 6, 0.647),
                entry("New York Jets", "NYJ", 10, 7, 0.529),
            ],
            vec![],
        );
        let st = parse(&payload);
        let names: Vec<&str> = st.conference(Conference::AFC).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Miami Dolphins", "New York Jets", "Buffalo Bills"]);
        assert!(st.conference(Conference::NFC).is_empty());
    }
}
