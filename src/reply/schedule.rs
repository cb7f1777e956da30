// src/reply/schedule.rs
use chrono::{DateTime, Utc};

use crate::core::time::to_eastern;
use crate::specs::schedule::{last_game, next_game};
use crate::specs::scoreboard::Game;
use crate::store::TeamRecord;

pub fn render_next(team: &TeamRecord, games: &[Game], now: DateTime<Utc>) -> String {
    let Some(game) = next_game(games, now) else {
        return format!("No upcoming games for {}.", team.display_name);
    };
    let at_home = game.home.name.eq_ignore_ascii_case(&team.display_name);
    let opponent = if at_home { &game.away.name } else { &game.home.name };
    format!(
        "Next game for {}: {} vs {} on {}.",
        team.display_name,
        if at_home { "at home" } else { "away" },
        opponent,
        to_eastern(game.date.as_ref())
    )
}

pub fn render_last(team: &TeamRecord, games: &[Game], now: DateTime<Utc>) -> String {
    let Some(game) = last_game(games, now) else {
        return format!("No completed games for {}.", team.display_name);
    };
    format!(
        "Last game for {} on {}: {} {} - {} {}",
        team.display_name,
        to_eastern(game.date.as_ref()),
        game.away.name,
        game.away.score,
        game.home.name,
        game.home.score
    )
}
