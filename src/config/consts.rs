// src/config/consts.rs

// Net config
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const RETRY_ATTEMPTS: u32 = 3;
pub const BACKOFF_START_MS: u64 = 1_000; // doubles per attempt
pub const USER_AGENT: &str = "nfl_chat/0.1";

// Directory cache
pub const CACHE_TTL_SECS: u64 = 60 * 60 * 6;

// Resolution
pub const FUZZY_THRESHOLD: f64 = 0.80;
pub const MAX_CHOICES: usize = 5;
pub const MAX_NEWS_ITEMS: usize = 6;

// Endpoints
pub const ESPN_SCOREBOARD_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/scoreboard";
pub const ESPN_NEWS_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/news";
pub const ESPN_TEAMS_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/teams";
pub const ESPN_SCHEDULE_URL: &str = "https://site.api.espn.com/apis/site/v2/sports/football/nfl/teams/{id}/schedule";
pub const ESPN_STANDINGS_URL: &str = "https://site.api.espn.com/apis/v2/sports/football/nfl/standings";
pub const SLEEPER_PLAYERS_URL: &str = "https://api.sleeper.app/v1/players/nfl";
pub const SLEEPER_STATS_URL: &str = "https://api.sleeper.app/v1/stats/nfl/regular/{year}";
pub const GOOGLE_NEWS_RSS: &str = "https://news.google.com/rss/search?q={query}+NFL&hl=en-US&gl=US&ceid=US:en";
pub const YAHOO_NFL_RSS: &str = "https://sports.yahoo.com/nfl/rss.xml";
pub const PFT_RSS: &str = "https://profootballtalk.nbcsports.com/feed/";

/// Team nicknames checked before the directory keys.
pub const COMMON_TEAM_NAMES: [&str; 32] = [
    "giants", "cowboys", "eagles", "commanders", "49ers", "seahawks", "rams", "cardinals",
    "packers", "bears", "lions", "vikings", "saints", "falcons", "buccaneers", "panthers",
    "chiefs", "broncos", "raiders", "chargers", "bills", "patriots", "dolphins", "jets",
    "ravens", "bengals", "steelers", "browns", "colts", "titans", "jaguars", "texans",
];

pub const NFC_MASCOTS: [&str; 16] = [
    "cowboys", "giants", "eagles", "commanders",
    "bears", "lions", "packers", "vikings",
    "falcons", "panthers", "saints", "buccaneers",
    "cardinals", "rams", "49ers", "seahawks",
];

pub const AFC_MASCOTS: [&str; 16] = [
    "bills", "dolphins", "patriots", "jets",
    "ravens", "bengals", "browns", "steelers",
    "texans", "colts", "jaguars", "titans",
    "broncos", "chiefs", "raiders", "chargers",
];

/// Filler phrases dropped by the normalizer (whole words, longest first).
pub const FILLER_PHRASES: &[&str] = &[
    "who is", "tell me about", "show me", "give me",
    "player", "on the", "in the", "from", "team", "the",
    "for", "fantasy", "stats", "ppr", "pts",
    "qb for", "wr for", "rb for", "te for", "k for",
    "of the", "on team", "the team", "play for",
    "stats for", "fantasy points", "profile", "about", "what about",
];

/// Words that carry intent but never name a subject.
pub const ACTION_WORDS: &[&str] = &[
    "fantasy", "stats", "stat", "ppr", "pts", "points", "point",
    "news", "headline", "headlines", "article", "articles",
    "schedule", "last", "next", "previous", "recent", "upcoming",
    "game", "games", "play", "plays", "played", "playing",
    "score", "scores", "standing", "standings", "record", "rank", "ranking",
    "profile", "about", "info", "who", "what", "when", "where", "how",
    "is", "are", "was", "were", "do", "does", "did", "have", "has", "had", "old", "many", "much",
    "he", "him", "his", "them", "they", "their", "she", "her",
    "a", "an", "and", "at", "to", "of", "in", "on", "with", "vs", "against",
    "me", "tell", "show", "give", "week", "season", "today", "tonight",
    "this", "that", "nfl", "football", "team", "player", "please",
];

/// Action words that must never become the session subject.
pub const RESERVED_SUBJECTS: [&str; 6] = ["fantasy", "news", "scores", "last game", "next game", "stats"];

/// Keywords that mark a follow-up about the previous subject.
pub const FOLLOW_UP_KEYWORDS: &[&str] = &[
    "fantasy", "stats", "ppr", "points",
    "news", "headlines", "headline", "articles", "article",
    "schedule", "last game", "next game",
];

pub const PRONOUNS: [&str; 6] = ["he", "him", "his", "them", "they", "their"];

/// Positions eligible for fantasy point lookups.
pub const FANTASY_POSITIONS: [&str; 4] = ["QB", "RB", "WR", "TE"];

/// Extra news search terms per nickname.
pub const NEWS_ALIASES: &[(&str, &[&str])] = &[
    ("giants", &["new york giants", "ny giants", "big blue"]),
    ("jets", &["new york jets", "ny jets"]),
    ("patriots", &["new england patriots"]),
    ("cowboys", &["dallas cowboys"]),
];
