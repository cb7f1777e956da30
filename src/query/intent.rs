// src/query/intent.rs
//! First-match-wins intent classification.
//!
//! Single keywords match as word prefixes ("score" hits "scores", "rank" hits
//! "rankings" but not "frank"); multi-word keywords match as whole phrases.

use std::fmt;

use crate::core::sanitize::{clean_text, contains_phrase};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Scores,
    News,
    Standings,
    NextGame,
    LastGame,
    Fantasy,
    Profile,
    Help,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Intent::Scores => "scores",
            Intent::News => "news",
            Intent::Standings => "standings",
            Intent::NextGame => "next game",
            Intent::LastGame => "last game",
            Intent::Fantasy => "fantasy",
            Intent::Profile => "profile",
            Intent::Help => "help",
        })
    }
}

struct Words<'a> {
    text: &'a str,
    words: Vec<&'a str>,
}

impl<'a> Words<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, words: text.split(' ').filter(|w| !w.is_empty()).collect() }
    }

    fn has(&self, key: &str) -> bool {
        if key.contains(' ') {
            contains_phrase(self.text, key)
        } else {
            self.words.iter().any(|w| w.starts_with(key))
        }
    }

    fn any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.has(k))
    }
}

pub fn classify(query: &str) -> Intent {
    let cleaned = clean_text(query);
    let w = Words::new(&cleaned);

    if w.any(&["score"]) {
        Intent::Scores
    } else if w.any(&["news", "article", "headline"]) {
        Intent::News
    } else if w.any(&["standing", "record", "rank"]) {
        Intent::Standings
    } else if (w.any(&["next", "upcoming"]) || (w.has("when") && w.has("play")))
        && w.any(&["play", "game", "schedule"])
    {
        Intent::NextGame
    } else if w.any(&["last", "previous", "recent"]) && w.any(&["game", "played"]) {
        Intent::LastGame
    } else if w.any(&["fantasy", "pts", "ppr", "stats for"]) {
        Intent::Fantasy
    } else if w.any(&["who is", "whos", "player", "about", "profile", "tell me about"]) {
        Intent::Profile
    } else {
        Intent::Help
    }
}
