// tests/chat.rs
//
// End-to-end conversations against in-memory feeds.
//
mod common;

use common::{PLAYERS, TEAMS, bot, options, seeded};
use nfl_chat::bot::{EMPTY_PROMPT, HELP_TEXT};
use nfl_chat::{ChatBot, Reply, Session};

fn text(reply: Reply) -> String {
    match reply {
        Reply::Text(t) => t,
        Reply::Choose(d) => panic!("expected text, got choices:\n{d}"),
    }
}

#[test]
fn empty_input_and_help() {
    let fake = seeded();
    let bot = bot(&fake);
    let mut s = Session::new();
    assert_eq!(text(bot.handle_query("   ", &mut s)), EMPTY_PROMPT);
    assert_eq!(text(bot.handle_query("hello there", &mut s)), HELP_TEXT);
}

#[test]
fn filler_only_profile_asks_for_a_name() {
    let fake = seeded();
    let bot = bot(&fake);
    let reply = text(bot.handle_query("who is the player", &mut Session::new()));
    assert_eq!(reply, "Please include the player's name.");
}

#[test]
fn position_and_team_pick_a_single_profile() {
    let fake = seeded();
    let bot = bot(&fake);
    let reply = text(bot.handle_query("who is josh allen qb bills", &mut Session::new()));
    assert!(reply.starts_with("**Name:** Josh Allen"), "{reply}");
    assert!(reply.contains("- **Team:** BUF"));
    assert!(reply.contains("- **Position:** QB"));
    assert_eq!(bot.store().profiles().len(), 1);
}

#[test]
fn wrong_position_is_not_found() {
    let fake = seeded();
    let bot = bot(&fake);
    let reply = text(bot.handle_query("who is josh allen wr bills", &mut Session::new()));
    assert_eq!(reply, "Player 'Josh Allen' not found.");
}

#[test]
fn duplicate_names_ask_for_a_choice() {
    let fake = seeded();
    let bot = bot(&fake);
    let mut s = Session::new();

    let d = match bot.handle_query("who is josh allen", &mut s) {
        Reply::Choose(d) => d,
        Reply::Text(t) => panic!("expected a choice, got {t}"),
    };
    let ids: Vec<&str> = d.candidates.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["1466", "4984", "9000"]);
    assert!(d.to_string().contains("1. Josh Allen (DE, JAX)"));
    assert_eq!(s.pending(), Some(&d));
    assert_eq!(bot.store().profiles().len(), 3);

    let picked = text(bot.choose(&mut s, "1466"));
    assert!(picked.contains("- **Team:** JAX"));
    assert_eq!(s.context().last_entity(), Some("Josh Allen"));
    assert!(s.pending().is_none());

    assert_eq!(text(bot.choose(&mut s, "nope")), "Player id 'nope' not found.");
}

#[test]
fn fantasy_takes_the_top_scorer() {
    let fake = seeded();
    let bot = bot(&fake);
    let reply = text(bot.handle_query("fantasy stats for josh allen", &mut Session::new()));
    assert_eq!(reply, "Josh Allen (QB, BUF): **30.1 PPR**");

    let reply = text(bot.handle_query("mahomes ppr", &mut Session::new()));
    assert_eq!(reply, "Patrick Mahomes (QB, KC): **25.5 PPR**");

    let reply = text(bot.handle_query("fantasy points", &mut Session::new()));
    assert!(reply.starts_with("Please specify a player name"));
}

#[test]
fn follow_ups_reuse_the_last_subject() {
    let fake = seeded();
    let bot = bot(&fake);
    let mut s = Session::new();

    bot.handle_query("who is josh allen qb bills", &mut s);
    assert_eq!(s.context().last_entity(), Some("josh allen"));

    let reply = text(bot.handle_query("fantasy points for him", &mut s));
    assert_eq!(reply, "Josh Allen (QB, BUF): **30.1 PPR**");

    let reply = text(bot.handle_query("news", &mut s));
    assert!(reply.starts_with("📰 **Josh Allen News (Multi-source)**"), "{reply}");
    assert!(reply.contains("Josh Allen leads Bills comeback"));
    assert!(!reply.contains("Chiefs roll on"));

    // reserved words never replace the subject
    bot.handle_query("fantasy", &mut s);
    bot.handle_query("stats", &mut s);
    assert_eq!(s.context().last_entity(), Some("josh allen"));

    // a new team mention does
    bot.handle_query("chiefs score", &mut s);
    assert_eq!(s.context().last_entity(), Some("Kansas City Chiefs"));
}

#[test]
fn only_known_teams_and_players_become_the_subject() {
    let fake = seeded();
    let bot = bot(&fake);
    let mut s = Session::new();

    bot.handle_query("who is josh allen qb bills", &mut s);
    for raw in ["help", "hello there", "whats up", "who is zzyzx"] {
        bot.handle_query(raw, &mut s);
        assert_eq!(s.context().last_entity(), Some("josh allen"), "after '{raw}'");
    }

    let reply = text(bot.handle_query("fantasy stats", &mut s));
    assert_eq!(reply, "Josh Allen (QB, BUF): **30.1 PPR**");
}

#[test]
fn news_follow_ups_keep_the_player() {
    let fake = seeded();
    let bot = bot(&fake);
    let mut s = Session::new();
    bot.handle_query("who is josh allen qb bills", &mut s);

    for raw in ["latest news", "any news?", "what are the latest headlines"] {
        let reply = text(bot.handle_query(raw, &mut s));
        assert!(reply.starts_with("📰 **Josh Allen News (Multi-source)**"), "{raw}: {reply}");
        assert!(reply.contains("Josh Allen leads Bills comeback"));
    }
    assert_eq!(s.context().last_entity(), Some("josh allen"));
}

#[test]
fn team_standings_and_league_table() {
    let fake = seeded();
    let bot = bot(&fake);
    let mut s = Session::new();

    let reply = text(bot.handle_query("Bills standings", &mut s));
    assert!(reply.contains("9-8"), "{reply}");
    assert!(reply.starts_with("📊 **Buffalo Bills Standings**"));

    let table = text(bot.handle_query("standings", &mut Session::new()));
    assert!(table.contains("### 🏈 AFC East"));
    assert!(table.contains("**1. Kansas City Chiefs** 15-2-0"));
    assert!(table.contains("## 🔥 NFC Playoff Projection\n\n**1. New York Giants**"));
}

#[test]
fn scores_filter_by_team() {
    let fake = seeded();
    let bot = bot(&fake);
    let reply = text(bot.handle_query("chiefs score", &mut Session::new()));
    assert!(reply.contains("Baltimore Ravens 20 @ Kansas City Chiefs 27"));
    assert!(!reply.contains("Cardinals"));

    let all = text(bot.handle_query("nfl scores", &mut Session::new()));
    assert!(all.contains("Cardinals") && all.contains("Ravens"));
}

#[test]
fn next_and_last_game() {
    let fake = seeded();
    let bot = bot(&fake);

    let next = text(bot.handle_query("when do the bills play next", &mut Session::new()));
    assert!(next.starts_with("Next game for Buffalo Bills: at home vs New York Jets on"), "{next}");

    let last = text(bot.handle_query("bills last game", &mut Session::new()));
    assert!(last.ends_with("Buffalo Bills 13 - Miami Dolphins 7"), "{last}");

    let missing = text(bot.handle_query("next game", &mut Session::new()));
    assert_eq!(missing, "Please include a team name for 'next game' queries.");

    let unknown = text(bot.handle_query("seahawks next game", &mut Session::new()));
    assert_eq!(unknown, "Team 'seahawks' not found.");

    // no schedule feed for the Giants
    let broken = text(bot.handle_query("giants next game", &mut Session::new()));
    assert!(broken.starts_with("⚠️ Error fetching schedule:"), "{broken}");
}

#[test]
fn news_sources_and_fallback() {
    let fake = seeded();
    let bot = bot(&fake);

    let pats = text(bot.handle_query("patriots news", &mut Session::new()));
    assert!(pats.starts_with("📰 **New England Patriots News (Multi-source)**"), "{pats}");
    assert!(pats.contains("[Patriots name new coach](https://yahoo/1)"));

    let fallback = text(bot.handle_query("seahawks news", &mut Session::new()));
    assert!(fallback.starts_with("📰 **Top NFL Headlines (ESPN)**"), "{fallback}");
    assert!(fallback.contains("Chiefs roll on"));

    let league = text(bot.handle_query("news", &mut Session::new()));
    assert!(league.starts_with("📰 **Top NFL Headlines (ESPN)**"));
}

#[test]
fn directories_fetch_once_within_ttl() {
    let fake = seeded();
    let bot = bot(&fake);
    let mut s = Session::new();
    bot.handle_query("who is travis kelce", &mut s);
    bot.handle_query("who is patrick mahomes", &mut s);
    assert_eq!(fake.calls(PLAYERS), 1);
    assert_eq!(fake.calls(TEAMS), 1);
}

#[test]
fn stale_directory_is_served_when_refresh_fails() {
    let fake = seeded();
    let mut opts = options();
    opts.cache.ttl_secs = 0;
    let bot = ChatBot::with_fetcher(fake.clone(), opts);

    let first = text(bot.handle_query("who is travis kelce", &mut Session::new()));
    assert!(first.contains("Travis Kelce"));

    fake.fail(PLAYERS, 500);
    let second = text(bot.handle_query("who is patrick mahomes", &mut Session::new()));
    assert!(second.contains("Patrick Mahomes"), "{second}");
    assert_eq!(fake.calls(PLAYERS), 2);
}

#[test]
fn missing_directory_is_reported() {
    let fake = seeded();
    fake.fail(PLAYERS, 503);
    let bot = bot(&fake);
    let reply = text(bot.handle_query("who is travis kelce", &mut Session::new()));
    assert!(reply.starts_with("⚠️ Error fetching players:"), "{reply}");
}
