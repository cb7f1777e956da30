// src/cli.rs
//! Terminal front end: one-shot question, team listing, or an interactive
//! REPL that keeps session context and accepts numbered choices.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::bot::{ChatBot, Reply, Session};
use crate::config::options::AppOptions;

#[derive(Debug, Parser)]
#[command(name = "nfl_chat", version, about = "Ask about NFL scores, standings, news, schedules and players")]
pub struct Args {
    /// Answer one question and exit
    #[arg(short = 'q', long)]
    pub ask: Option<String>,

    /// Print the team directory (id,abbreviation,name) and exit
    #[arg(long)]
    pub list_teams: bool,

    /// Directory cache TTL in seconds
    #[arg(long, env = "NFL_CHAT_TTL_SECS")]
    pub ttl_secs: Option<u64>,

    #[arg(long, env = "NFL_CHAT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Attempts per request
    #[arg(long, env = "NFL_CHAT_RETRIES")]
    pub retries: Option<u32>,

    /// First retry delay; doubles per attempt
    #[arg(long, env = "NFL_CHAT_BACKOFF_MS")]
    pub backoff_ms: Option<u64>,

    /// Minimum similarity (0..1) for fuzzy name matches
    #[arg(long, env = "NFL_CHAT_FUZZY_THRESHOLD")]
    pub fuzzy_threshold: Option<f64>,

    #[arg(long, env = "NFL_CHAT_MAX_NEWS")]
    pub max_news: Option<usize>,

    /// Only use ESPN for news
    #[arg(long, env = "NFL_CHAT_NO_RSS")]
    pub no_rss: bool,

    /// Season for fantasy totals (default: current year)
    #[arg(long, env = "NFL_CHAT_SEASON")]
    pub season: Option<i32>,

    #[arg(long, env = "NFL_CHAT_TEAMS_URL", hide = true)]
    pub teams_url: Option<String>,
    #[arg(long, env = "NFL_CHAT_PLAYERS_URL", hide = true)]
    pub players_url: Option<String>,
    #[arg(long, env = "NFL_CHAT_SCOREBOARD_URL", hide = true)]
    pub scoreboard_url: Option<String>,
    #[arg(long, env = "NFL_CHAT_STANDINGS_URL", hide = true)]
    pub standings_url: Option<String>,
    #[arg(long, env = "NFL_CHAT_NEWS_URL", hide = true)]
    pub news_url: Option<String>,
    /// Sleeper season stats URL; `{year}` is substituted
    #[arg(long, env = "NFL_CHAT_STATS_URL", hide = true)]
    pub stats_url: Option<String>,

    /// Tracing filter, e.g. "nfl_chat=debug" (falls back to RUST_LOG)
    #[arg(long, env = "NFL_CHAT_LOG")]
    pub log: Option<String>,

    /// Write logs here instead of stderr
    #[arg(long, env = "NFL_CHAT_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        if let Some(v) = self.ttl_secs { opts.cache.ttl_secs = v; }
        if let Some(v) = self.timeout_secs { opts.net.timeout_secs = v; }
        if let Some(v) = self.retries { opts.net.retries = v.max(1); }
        if let Some(v) = self.backoff_ms { opts.net.backoff_ms = v; }
        if let Some(v) = self.fuzzy_threshold { opts.resolve.fuzzy_threshold = v.clamp(0.0, 1.0); }
        if let Some(v) = self.max_news { opts.news.max_items = v; }
        if self.no_rss { opts.news.rss = false; }
        opts.season = self.season;

        let ep = &mut opts.endpoints;
        for (src, dst) in [
            (&self.teams_url, &mut ep.teams),
            (&self.players_url, &mut ep.players),
            (&self.scoreboard_url, &mut ep.scoreboard),
            (&self.standings_url, &mut ep.standings),
            (&self.news_url, &mut ep.news),
            (&self.stats_url, &mut ep.season_stats),
        ] {
            if let Some(url) = src {
                *dst = url.clone();
            }
        }
        opts
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::init(args.log.as_deref(), args.log_file.as_deref())?;

    let bot = ChatBot::new(args.to_options())?;

    if args.list_teams {
        let teams = bot.store().teams()?;
        for t in teams.records() {
            println!("{},{},{}", t.id, t.abbreviation, t.display_name);
        }
        return Ok(());
    }

    let mut session = Session::new();
    if let Some(question) = &args.ask {
        println!("{}", bot.handle_query(question, &mut session));
        return Ok(());
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl(&bot, &mut session, stdin.lock(), &mut stdout)?;
    Ok(())
}

/// Read lines until EOF or `quit`. A bare number answers a pending choice;
/// `refresh` drops the cached directories.
pub fn repl<R: BufRead, W: Write>(bot: &ChatBot, session: &mut Session, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "🏈 NFL chat. Type 'help' for examples, 'quit' to leave.")?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let text = line.trim();
        match text.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "" => {}
            "refresh" => {
                bot.store().invalidate();
                logf!("directories invalidated");
                writeln!(out, "Team and player lists will be reloaded on the next question.")?;
            }
            _ => {
                let reply = match pick_from_pending(session, text) {
                    Some(id) => bot.choose(session, &id),
                    None => bot.handle_query(text, session),
                };
                writeln!(out, "{reply}")?;
                if let Reply::Choose(_) = reply {
                    writeln!(out, "(reply with a number to pick one)")?;
                }
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn pick_from_pending(session: &Session, text: &str) -> Option<String> {
    let n: usize = text.parse().ok()?;
    session.pending()?.pick(n).map(|p| p.id.clone())
}
