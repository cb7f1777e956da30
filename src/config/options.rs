// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub net: NetOptions,
    pub cache: CacheOptions,
    pub resolve: ResolveOptions,
    pub news: NewsOptions,
    pub endpoints: Endpoints,
    /// Season used for fantasy points. `None` → current calendar year.
    pub season: Option<i32>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            net: NetOptions::default(),
            cache: CacheOptions::default(),
            resolve: ResolveOptions::default(),
            news: NewsOptions::default(),
            endpoints: Endpoints::default(),
            season: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub timeout_secs: u64,
    pub retries: u32,
    pub backoff_ms: u64,
    pub user_agent: String,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            timeout_secs: REQUEST_TIMEOUT_SECS,
            retries: RETRY_ATTEMPTS,
            backoff_ms: BACKOFF_START_MS,
            user_agent: s!(USER_AGENT),
        }
    }
}

impl NetOptions {
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs) }
    pub fn backoff(&self) -> Duration { Duration::from_millis(self.backoff_ms) }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    pub ttl_secs: u64,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { ttl_secs: CACHE_TTL_SECS }
    }
}

impl CacheOptions {
    pub fn ttl(&self) -> Duration { Duration::from_secs(self.ttl_secs) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolveOptions {
    pub fuzzy_threshold: f64,
    pub max_choices: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: FUZZY_THRESHOLD,
            max_choices: MAX_CHOICES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsOptions {
    pub max_items: usize,
    /// Pull the RSS sources in addition to ESPN.
    pub rss: bool,
}

impl Default for NewsOptions {
    fn default() -> Self {
        Self { max_items: MAX_NEWS_ITEMS, rss: true }
    }
}

/// Feed URLs. `{id}`, `{year}` and `{query}` are substituted at call time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub scoreboard: String,
    pub news: String,
    pub teams: String,
    pub schedule: String,
    pub standings: String,
    pub players: String,
    pub season_stats: String,
    pub google_news: String,
    pub yahoo_news: String,
    pub pft_news: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            scoreboard: s!(ESPN_SCOREBOARD_URL),
            news: s!(ESPN_NEWS_URL),
            teams: s!(ESPN_TEAMS_URL),
            schedule: s!(ESPN_SCHEDULE_URL),
            standings: s!(ESPN_STANDINGS_URL),
            players: s!(SLEEPER_PLAYERS_URL),
            season_stats: s!(SLEEPER_STATS_URL),
            google_news: s!(GOOGLE_NEWS_RSS),
            yahoo_news: s!(YAHOO_NFL_RSS),
            pft_news: s!(PFT_RSS),
        }
    }
}

impl Endpoints {
    pub fn schedule_for(&self, team_id: &str) -> String {
        self.schedule.replace("{id}", team_id)
    }

    pub fn season_stats_for(&self, year: i32) -> String {
        self.season_stats.replace("{year}", &year.to_string())
    }

    pub fn google_news_for(&self, query: &str) -> String {
        let q = query.split_whitespace().collect::<Vec<_>>().join("+");
        self.google_news.replace("{query}", &q)
    }
}
