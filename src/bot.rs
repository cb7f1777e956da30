// src/bot.rs
//! The chat entry point: context rewrite → intent → fetch → format.
//!
//! A [`ChatBot`] owns the directory store and is shared by every session.
//! Per-user state (last subject, pending disambiguation) lives in
//! [`Session`], which callers keep between turns.

use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, Utc};

use crate::config::options::AppOptions;
use crate::core::sanitize::title_case;
use crate::core::{Fetch, HttpFetcher};
use crate::query::{self, Intent, Known, NormalizedQuery, PlayerMatch, QueryContext, classify, context, normalize};
use crate::reply::{self, fetch_error};
use crate::specs::{self, news::Source};
use crate::store::{DirectoryStore, PlayerRecord, TeamDirectory, TeamRecord};

pub const EMPTY_PROMPT: &str = "Ask me about NFL scores, standings, news, schedules or players.";

pub const HELP_TEXT: &str = "I can help with:
- Live scores: \"NFL scores\", \"Chiefs score\"
- Standings: \"standings\", \"Bills standings\"
- News: \"Patriots news\", \"latest headlines\"
- Schedule: \"when do the Giants play next\", \"Eagles last game\"
- Fantasy: \"fantasy stats for Josh Allen QB Bills\"
- Players: \"who is Travis Kelce\"";

/// Several players matched; the caller picks one by number or id.
#[derive(Clone, Debug, PartialEq)]
pub struct Disambiguation {
    pub prompt: String,
    pub candidates: Vec<PlayerRecord>,
    pub remaining: usize,
}

impl Disambiguation {
    /// 1-based, as rendered.
    pub fn pick(&self, number: usize) -> Option<&PlayerRecord> {
        number.checked_sub(1).and_then(|i| self.candidates.get(i))
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prompt)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Text(String),
    Choose(Disambiguation),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => f.write_str(text),
            Reply::Choose(d) => fmt::Display::fmt(d, f),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    context: QueryContext,
    pending: Option<Disambiguation>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &QueryContext {
        &self.context
    }

    /// The open disambiguation, if the last reply asked for a choice.
    pub fn pending(&self) -> Option<&Disambiguation> {
        self.pending.as_ref()
    }
}

pub struct ChatBot {
    store: DirectoryStore,
    opts: AppOptions,
}

impl ChatBot {
    /// Bot backed by the real HTTP client.
    pub fn new(opts: AppOptions) -> Result<Self, reqwest::Error> {
        let fetcher = HttpFetcher::new(&opts.net)?;
        Ok(Self::with_fetcher(Arc::new(fetcher), opts))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetch>, opts: AppOptions) -> Self {
        Self { store: DirectoryStore::new(fetcher, &opts), opts }
    }

    pub fn store(&self) -> &DirectoryStore {
        &self.store
    }

    pub fn options(&self) -> &AppOptions {
        &self.opts
    }

    pub fn handle_query(&self, text: &str, session: &mut Session) -> Reply {
        let raw = text.trim();
        if raw.is_empty() {
            return Reply::Text(s!(EMPTY_PROMPT));
        }

        let teams = self.store.teams().ok();
        let players = session
            .context
            .last_entity()
            .and_then(|_| self.store.players_snapshot());
        let known = Known { teams: teams.as_deref(), players: players.as_deref() };
        let effective = context::resolve_with(raw, session.context.last_entity(), known);
        if effective != raw {
            logd!("rewrote '{raw}' → '{effective}'");
        }
        let intent = classify(&effective);
        logf!("intent {intent} for '{effective}'");

        session.pending = None;
        let reply = match intent {
            Intent::Scores => Reply::Text(self.scores(&effective)),
            Intent::News => Reply::Text(self.news(&effective)),
            Intent::Standings => Reply::Text(self.standings(&effective)),
            Intent::NextGame => Reply::Text(self.schedule(&effective, true)),
            Intent::LastGame => Reply::Text(self.schedule(&effective, false)),
            Intent::Fantasy => Reply::Text(self.fantasy(&effective)),
            Intent::Profile => self.profile(&effective),
            Intent::Help => Reply::Text(s!(HELP_TEXT)),
        };
        if let Reply::Choose(d) = &reply {
            session.pending = Some(d.clone());
        }

        let players = self.store.players_snapshot();
        let known = Known { teams: teams.as_deref(), players: players.as_deref() };
        session.context.observe(raw, known, &self.opts.resolve);
        reply
    }

    /// Follow-up to a [`Reply::Choose`]: show the picked player and make
    /// them the session subject.
    pub fn choose(&self, session: &mut Session, player_id: &str) -> Reply {
        let players = match self.store.players() {
            Ok(p) => p,
            Err(e) => return Reply::Text(fetch_error("players", &e)),
        };
        match players.get(player_id) {
            Some(p) => {
                self.store.record_profile(p);
                session.context.remember(&p.full_name);
                session.pending = None;
                Reply::Text(reply::players::render_profile(p))
            }
            None => Reply::Text(format!("Player id '{player_id}' not found.")),
        }
    }

    /// Team named in the query: the normalizer's team hint, else the
    /// leftover words. The hint text is returned too for display.
    fn team_in(&self, query: &str) -> (Option<Arc<TeamRecord>>, Option<String>) {
        let teams = self.store.teams_or_empty();
        let nq = normalize(query, Some(teams.as_ref()));
        match nq.team_hint {
            Some(hint) => (teams.resolve(&hint), Some(hint)),
            None => {
                let rest = nq.subject_tokens().join(" ");
                if rest.is_empty() {
                    (None, None)
                } else {
                    (teams.resolve(&rest), None)
                }
            }
        }
    }

    fn scores(&self, query: &str) -> String {
        let (team, hint) = self.team_in(query);
        let filter = team.map(|t| t.display_name.clone()).or(hint);
        match specs::scoreboard::fetch(self.store.fetcher(), self.store.endpoints()) {
            Ok(games) => reply::scores::render(&games, filter.as_deref()),
            Err(e) => fetch_error("scores", &e),
        }
    }

    fn standings(&self, query: &str) -> String {
        let (team, hint) = self.team_in(query);
        let standings = match specs::standings::fetch(self.store.fetcher(), self.store.endpoints()) {
            Ok(s) => s,
            Err(e) => return fetch_error("standings", &e),
        };
        match (team, hint) {
            (Some(t), _) => reply::standings::render_for(&standings, &t.display_name),
            (None, Some(h)) => reply::standings::render_for(&standings, &h),
            (None, None) => reply::standings::render_league(&standings),
        }
    }

    fn schedule(&self, query: &str, next: bool) -> String {
        let which = if next { "next game" } else { "last game" };
        let team = match self.team_in(query) {
            (Some(t), _) => t,
            (None, Some(h)) => return format!("Team '{h}' not found."),
            (None, None) => return format!("Please include a team name for '{which}' queries."),
        };
        let games = match specs::schedule::fetch(self.store.fetcher(), &team.schedule_url) {
            Ok(g) => g,
            Err(e) => return fetch_error("schedule", &e),
        };
        let now = Utc::now();
        if next {
            reply::schedule::render_next(&team, &games, now)
        } else {
            reply::schedule::render_last(&team, &games, now)
        }
    }

    /// Leftover words of a player query, title-cased. When the directory
    /// knows some of them, only those are kept ("Josh Allen latest" → "Josh Allen").
    fn player_words(&self, query: &str) -> Option<String> {
        let tokens = normalize(query, None).subject_tokens();
        let named: Vec<&str> = match self.store.players_snapshot() {
            Some(players) => tokens
                .iter()
                .filter(|w| players.has_name_word(w))
                .map(String::as_str)
                .collect(),
            None => Vec::new(),
        };
        let name = if named.is_empty() { tokens.join(" ") } else { named.join(" ") };
        (!name.is_empty()).then(|| title_case(&name))
    }

    fn news(&self, query: &str) -> String {
        let max = self.opts.news.max_items;
        let endpoints = self.store.endpoints();
        let fetcher = self.store.fetcher();

        let subject = match self.team_in(query) {
            (Some(t), _) => Some(t.display_name.clone()),
            (None, hint) => hint.or_else(|| self.player_words(query)),
        };

        let espn = specs::news::fetch_espn(fetcher, &endpoints.news);
        let Some(subject) = subject else {
            return match espn {
                Ok(items) => reply::news::render_headlines(&items, max)
                    .unwrap_or_else(|| s!("No recent NFL headlines.")),
                Err(e) => fetch_error("news", &e),
            };
        };

        let mut articles = match espn {
            Ok(items) => items,
            Err(e) => {
                logw!("ESPN news unavailable: {e}");
                Vec::new()
            }
        };
        if self.opts.news.rss {
            let feeds = [
                (endpoints.google_news_for(&subject), Source::Google),
                (endpoints.yahoo_news.clone(), Source::Yahoo),
                (endpoints.pft_news.clone(), Source::Pft),
            ];
            for (url, source) in feeds {
                match specs::news::fetch_rss(fetcher, &url, source) {
                    Ok(items) => articles.extend(items),
                    Err(e) => logw!("{} news unavailable: {e}", source.label()),
                }
            }
        }
        reply::news::render(&subject, &articles, max)
    }

    /// Normalized query with intent vocabulary stripped from the name.
    fn player_query(&self, query: &str, teams: &TeamDirectory) -> NormalizedQuery {
        let nq = normalize(query, Some(teams));
        NormalizedQuery { name_tokens: nq.subject_tokens(), ..nq }
    }

    fn fantasy(&self, query: &str) -> String {
        let teams = self.store.teams_or_empty();
        let nq = self.player_query(query, &teams);
        if !nq.has_name() {
            return s!("Please specify a player name. Example: 'Fantasy stats for Patrick Mahomes'");
        }
        let players = match self.store.players() {
            Ok(p) => p,
            Err(e) => return fetch_error("players", &e),
        };
        let season = self.opts.season.unwrap_or_else(|| Utc::now().year());
        let url = self.store.endpoints().season_stats_for(season);
        let points = match specs::fantasy::fetch(self.store.fetcher(), &url) {
            Ok(p) => p,
            Err(e) => return fetch_error("fantasy stats", &e),
        };

        match query::resolve_fantasy(&players, Some(teams.as_ref()), &nq, &points, &self.opts.resolve) {
            Some(m) => reply::players::render_fantasy(&m),
            None => format!("No fantasy stats found for '{}'.", nq.name_tokens.join(" ")),
        }
    }

    fn profile(&self, query: &str) -> Reply {
        let teams = self.store.teams_or_empty();
        let nq = self.player_query(query, &teams);
        if !nq.has_name() {
            return Reply::Text(s!("Please include the player's name."));
        }
        let players = match self.store.players() {
            Ok(p) => p,
            Err(e) => return Reply::Text(fetch_error("players", &e)),
        };

        match query::resolve_player(&players, Some(teams.as_ref()), &nq, &self.opts.resolve) {
            PlayerMatch::Single(p) => {
                self.store.record_profile(&p);
                Reply::Text(reply::players::render_profile(&p))
            }
            PlayerMatch::Multiple { shown, remaining } => {
                for p in &shown {
                    self.store.record_profile(p);
                }
                Reply::Choose(Disambiguation {
                    prompt: reply::players::render_choices(&shown, remaining),
                    candidates: shown,
                    remaining,
                })
            }
            PlayerMatch::NoMatch => {
                Reply::Text(format!("Player '{}' not found.", title_case(&nq.name_tokens.join(" "))))
            }
        }
    }
}
