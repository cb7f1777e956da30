// src/store/players.rs
//! Player directory keyed by id, plus a name multi-map so players sharing a
//! full name stay distinct. Lookups by name hand back ids; callers always
//! dereference through [`PlayerDirectory::get`].

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::config::consts::FANTASY_POSITIONS;
use crate::core::sanitize::clean_text;

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    QB, RB, WR, TE, K, P,
    DE, DT, LB, CB, S,
    OL, G, T, C,
    /// Anything the feed sends outside the fixed set (e.g. "FB", "LS").
    Other(String),
}

impl Position {
    pub const KNOWN: [Position; 15] = [
        Position::QB, Position::RB, Position::WR, Position::TE, Position::K, Position::P,
        Position::DE, Position::DT, Position::LB, Position::CB, Position::S,
        Position::OL, Position::G, Position::T, Position::C,
    ];

    /// Only the fixed set; used when reading user text.
    pub fn parse_known(token: &str) -> Option<Position> {
        let up = token.trim().to_ascii_uppercase();
        Self::KNOWN.iter().find(|p| p.as_str() == up).cloned()
    }

    /// Feed value: fixed set, or `Other` for anything else non-empty.
    pub fn from_feed(raw: &str) -> Option<Position> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self::parse_known(raw).unwrap_or_else(|| Position::Other(raw.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::P => "P",
            Position::DE => "DE",
            Position::DT => "DT",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::S => "S",
            Position::OL => "OL",
            Position::G => "G",
            Position::T => "T",
            Position::C => "C",
            Position::Other(label) => label,
        }
    }

    pub fn is_fantasy(&self) -> bool {
        FANTASY_POSITIONS.contains(&self.as_str())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub position: Option<Position>,
    /// Team abbreviation; `None` for free agents.
    pub team: Option<String>,
    pub age: Option<u32>,
    pub college: Option<String>,
    pub years_experience: Option<u32>,
}

impl PlayerRecord {
    /// Cleaned lowercase full name, the form every matcher compares against.
    pub fn search_name(&self) -> String {
        clean_text(&self.full_name)
    }

    pub fn team_label(&self) -> &str {
        self.team.as_deref().unwrap_or("FA")
    }

    pub fn position_label(&self) -> &str {
        self.position.as_ref().map(Position::as_str).unwrap_or("?")
    }
}

#[derive(Debug, Default)]
pub struct PlayerDirectory {
    records: Vec<PlayerRecord>,
    search_names: Vec<String>,
    by_id: HashMap<String, usize>,
    by_name: HashMap<String, Vec<String>>,
    name_words: HashSet<String>,
}

impl PlayerDirectory {
    /// Later duplicates of an id replace earlier ones; records end up in id order.
    pub fn new(records: Vec<PlayerRecord>) -> Self {
        let mut unique: HashMap<String, PlayerRecord> = HashMap::with_capacity(records.len());
        for rec in records {
            if rec.id.is_empty() {
                continue;
            }
            unique.insert(rec.id.clone(), rec);
        }
        let mut records: Vec<PlayerRecord> = unique.into_values().collect();
        records.sort_by(|a, b| id_order(&a.id).cmp(&id_order(&b.id)).then_with(|| a.id.cmp(&b.id)));

        let search_names: Vec<String> = records.iter().map(PlayerRecord::search_name).collect();
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_name: HashMap<String, Vec<String>> = HashMap::new();
        for (i, rec) in records.iter().enumerate() {
            by_id.insert(rec.id.clone(), i);
            let key = rec.full_name.trim().to_lowercase();
            if !key.is_empty() {
                by_name.entry(key).or_default().push(rec.id.clone());
            }
        }

        let name_words = search_names
            .iter()
            .flat_map(|n| n.split(' '))
            .filter(|w| w.len() > 1)
            .map(String::from)
            .collect();

        Self { records, search_names, by_id, by_name, name_words }
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn get(&self, id: &str) -> Option<&PlayerRecord> {
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    /// Every id carrying this full name (case-insensitive).
    pub fn ids_named(&self, full_name: &str) -> &[String] {
        self.by_name
            .get(&full_name.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether some player's cleaned name contains this word. Initials are
    /// not indexed.
    pub fn has_name_word(&self, word: &str) -> bool {
        self.name_words.contains(word)
    }

    /// Records paired with their cleaned search names, id order.
    pub fn iter_searchable(&self) -> impl Iterator<Item = (&PlayerRecord, &str)> {
        self.records.iter().zip(self.search_names.iter().map(String::as_str))
    }

    pub fn records(&self) -> &[PlayerRecord] { &self.records }
}

fn id_order(id: &str) -> u64 {
    id.parse::<u64>().unwrap_or(u64::MAX)
}


#[cfg(test)]
mod tests {
    use super::fixtures::player;
    use super::*;

    #[test]
    fn same_name_players_both_survive() {
        let dir = PlayerDirectory::new(vec![
            player("4984", "Josh Allen", "QB", Some("BUF")),
            player("1466", "Josh Allen", "DE", Some("JAX")),
        ]);
        assert_eq!(dir.len(), 2);
        assert_eq!(dir.ids_named("JOSH ALLEN"), ["1466", "4984"]);
        assert_eq!(dir.get("4984").unwrap().team.as_deref(), Some("BUF"));
    }

    #[test]
    fn duplicate_ids_collapse_to_the_last_seen() {
        let dir = PlayerDirectory::new(vec![
            player("7", "Old Name", "RB", None),
            player("7", "New Name", "RB", Some("KC")),
            player("", "No Id", "RB", None),
        ]);
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("7").unwrap().full_name, "New Name");
        assert!(dir.ids_named("old name").is_empty());
        assert!(dir.has_name_word("new"));
        assert!(!dir.has_name_word("old"));
    }

    #[test]
    fn positions_outside_the_set_are_kept_as_other() {
        assert_eq!(Position::from_feed("qb"), Some(Position::QB));
        assert_eq!(Position::from_feed("FB"), Some(Position::Other(s!("FB"))));
        assert_eq!(Position::from_feed(" "), None);
        assert_eq!(Position::parse_known("fb"), None);
        assert!(Position::TE.is_fantasy());
        assert!(!Position::K.is_fantasy());
    }

    #[test]
    fn search_name_is_cleaned() {
        let p = player("1", "Ja'Marr Chase", "WR", Some("CIN"));
        assert_eq!(p.search_name(), "jamarr chase");
        assert_eq!(player("2", "X Y", "WR", None).team_label(), "FA");
    }
}
